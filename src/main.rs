//! CLI entry point for codecraft

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codecraft::commands::posts::Listing;
use codecraft::query::{CategoryFilter, FilterCriteria, SortMode};

#[derive(Parser)]
#[command(name = "codecraft")]
#[command(author = "CodeCraft Team")]
#[command(version)]
#[command(about = "Query the CodeCraft engineering blog's content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, draft, tag, category, author)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Most recently published posts
    Latest {
        /// Number of posts (defaults to latest_limit)
        #[arg(short)]
        n: Option<usize>,
    },

    /// Featured posts, in content order
    Featured {
        /// Number of posts (defaults to featured_limit)
        #[arg(short)]
        n: Option<usize>,
    },

    /// Posts in a category
    Category {
        /// Category slug
        slug: String,
    },

    /// Posts with a tag
    Tag {
        /// Tag slug
        slug: String,
    },

    /// Posts by an author
    Author {
        /// Author id
        id: String,
    },

    /// Show a post and its related posts
    Show {
        /// Post slug
        slug: String,
    },

    /// Posts related to a post
    Related {
        /// Post id
        post_id: String,

        /// Number of posts (defaults to related_limit)
        #[arg(short)]
        n: Option<usize>,
    },

    /// Search posts, categories, authors and tags
    #[command(alias = "s")]
    Search {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,
    },

    /// Filter and sort the blog listing
    #[command(alias = "f")]
    Filter {
        /// Title or excerpt text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category slug, or "all"
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,

        /// Tag slug; repeat to match any of several tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Sort order: latest, oldest, most-viewed, most-liked
        #[arg(short, long)]
        sort: Option<SortMode>,
    },

    /// Validate the content and print a summary
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "codecraft=debug,info"
    } else {
        "codecraft=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Version = cli.command {
        println!("codecraft version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let blog = codecraft::Blog::new(&base_dir)?;
    let json = cli.json;

    match cli.command {
        Commands::List { r#type } => {
            codecraft::commands::list::run(&blog, &r#type, json)?;
        }

        Commands::Latest { n } => {
            let listing = Listing::Latest(n.unwrap_or(blog.config.latest_limit));
            codecraft::commands::posts::run(&blog, &listing, json)?;
        }

        Commands::Featured { n } => {
            let listing = Listing::Featured(n.unwrap_or(blog.config.featured_limit));
            codecraft::commands::posts::run(&blog, &listing, json)?;
        }

        Commands::Category { slug } => {
            codecraft::commands::posts::run(&blog, &Listing::Category(slug), json)?;
        }

        Commands::Tag { slug } => {
            codecraft::commands::posts::run(&blog, &Listing::Tag(slug), json)?;
        }

        Commands::Author { id } => {
            codecraft::commands::posts::run(&blog, &Listing::Author(id), json)?;
        }

        Commands::Show { slug } => {
            codecraft::commands::show::run(&blog, &slug, json)?;
        }

        Commands::Related { post_id, n } => {
            let listing = Listing::Related {
                post_id,
                limit: n.unwrap_or(blog.config.related_limit),
            };
            codecraft::commands::posts::run(&blog, &listing, json)?;
        }

        Commands::Search { query } => {
            codecraft::commands::search::run(&blog, &query, json)?;
        }

        Commands::Filter {
            query,
            category,
            tags,
            sort,
        } => {
            let criteria = FilterCriteria::new()
                .query(query)
                .category(category)
                .tags(tags)
                .sort(sort.unwrap_or(blog.config.default_sort));
            codecraft::commands::search::filter(&blog, &criteria, json)?;
        }

        Commands::Check => {
            codecraft::commands::check::run(&blog)?;
        }

        // printed before loading content
        Commands::Version => {}
    }

    Ok(())
}

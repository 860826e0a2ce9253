//! Validate site content and report a summary

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::PostStatus;
use crate::Blog;

/// Counts reported by `check`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub published: usize,
    pub drafts: usize,
    pub archived: usize,
    pub featured: usize,
    pub authors: usize,
    pub categories: usize,
    pub tags: usize,
    /// Categories whose cached post count differs from the published count
    pub stale_categories: Vec<String>,
}

impl Summary {
    pub fn collect(blog: &Blog) -> Self {
        let catalog = &blog.catalog;
        let mut summary = Summary {
            authors: catalog.authors().count(),
            categories: catalog.categories().count(),
            tags: catalog.tags().count(),
            ..Summary::default()
        };

        for post in catalog.posts() {
            match post.status {
                PostStatus::Published => summary.published += 1,
                PostStatus::Draft => summary.drafts += 1,
                PostStatus::Archived => summary.archived += 1,
            }
            if post.is_published() && post.featured {
                summary.featured += 1;
            }
        }

        summary.stale_categories = blog
            .query()
            .category_counts()
            .into_iter()
            .filter(|(c, live)| c.post_count != *live)
            .map(|(c, _)| c.slug.clone())
            .collect();

        summary
    }
}

/// Site identity printed above the summary
pub fn header(config: &SiteConfig) -> String {
    format!(
        "{} <{}>\n{}\nBy {} ({})",
        config.title, config.url, config.description, config.author, config.language
    )
}

/// Load the content (validating it on the way) and print a summary
pub fn run(blog: &Blog) -> Result<()> {
    let summary = Summary::collect(blog);

    println!("{}", header(&blog.config));

    println!(
        "Posts: {} published, {} drafts, {} archived ({} featured)",
        summary.published, summary.drafts, summary.archived, summary.featured
    );
    println!(
        "Authors: {}, categories: {}, tags: {}",
        summary.authors, summary.categories, summary.tags
    );
    if !summary.stale_categories.is_empty() {
        println!(
            "Cached post counts differ for: {}",
            summary.stale_categories.join(", ")
        );
    }
    println!("Content OK");

    Ok(())
}

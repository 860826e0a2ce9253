//! List site content

use anyhow::Result;
use serde::Serialize;

use super::output::{print_json, print_posts};
use crate::content::{Post, PostStatus};
use crate::Blog;

#[derive(Serialize)]
struct Count<'a> {
    name: &'a str,
    slug: &'a str,
    count: usize,
}

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let query = blog.query();

    match content_type {
        "post" | "posts" => {
            print_posts(blog, "Posts", &query.list_published(), json)?;
        }
        "draft" | "drafts" => {
            let drafts: Vec<&Post> = blog
                .catalog
                .posts()
                .filter(|p| p.status != PostStatus::Published)
                .collect();
            if json {
                return print_json(&drafts);
            }
            println!("Unpublished ({}):", drafts.len());
            for post in drafts {
                println!("  {} - {} [{}]", post.status, post.title, post.slug);
            }
        }
        "tag" | "tags" => {
            let mut tags = query.tag_counts();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            let counts: Vec<_> = tags
                .iter()
                .map(|(t, count)| Count {
                    name: &t.name,
                    slug: &t.slug,
                    count: *count,
                })
                .collect();
            print_counts("Tags", &counts, json)?;
        }
        "category" | "categories" => {
            let mut categories = query.category_counts();
            categories.sort_by(|a, b| b.1.cmp(&a.1));
            let counts: Vec<_> = categories
                .iter()
                .map(|(c, count)| Count {
                    name: &c.name,
                    slug: &c.slug,
                    count: *count,
                })
                .collect();
            print_counts("Categories", &counts, json)?;
        }
        "author" | "authors" => {
            let authors: Vec<_> = blog.catalog.authors().collect();
            if json {
                return print_json(&authors);
            }
            println!("Authors ({}):", authors.len());
            for author in authors {
                println!(
                    "  {} - {}, {} ({} posts)",
                    author.id,
                    author.name,
                    author.role,
                    query.by_author(&author.id).len()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, draft, tag, category, author",
                content_type
            );
        }
    }

    Ok(())
}

fn print_counts(heading: &str, counts: &[Count], json: bool) -> Result<()> {
    if json {
        return print_json(counts);
    }
    println!("{} ({}):", heading, counts.len());
    for entry in counts {
        println!("  {} [{}] ({})", entry.name, entry.slug, entry.count);
    }
    Ok(())
}

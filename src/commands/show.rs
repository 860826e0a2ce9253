//! Show a single post with its related posts

use anyhow::{anyhow, Result};
use serde::Serialize;

use super::output::{post_line, print_json};
use crate::content::{Author, Category, Post, Tag};
use crate::helpers::Helpers;
use crate::Blog;

/// A post with its references resolved, as printed by `show`
#[derive(Debug, Serialize)]
pub struct PostDetail<'a> {
    pub post: &'a Post,
    pub author: Option<&'a Author>,
    pub category: Option<&'a Category>,
    pub tags: Vec<&'a Tag>,
    pub related: Vec<&'a Post>,
}

impl<'a> PostDetail<'a> {
    /// Resolve the post with `slug`, or `None` if there is none
    pub fn resolve(blog: &'a Blog, slug: &str) -> Option<Self> {
        let query = blog.query();
        let post = query.by_slug(slug)?;
        let catalog = &blog.catalog;

        Some(Self {
            post,
            author: catalog.author(&post.author),
            category: catalog.category(&post.category),
            tags: catalog.tags_of(post).collect(),
            related: query.related(&post.id, blog.config.related_limit),
        })
    }
}

/// Print the post with `slug`
pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let detail =
        PostDetail::resolve(blog, slug).ok_or_else(|| anyhow!("Post not found: {}", slug))?;

    if json {
        return print_json(&detail);
    }

    let helpers = Helpers::new(&blog.config);
    let post = detail.post;

    println!("{}", post.title);
    println!("  slug:      {}", post.slug);
    println!("  status:    {}", post.status);
    if let Some(author) = detail.author {
        println!("  author:    {} ({})", author.name, author.role);
    }
    if let Some(category) = detail.category {
        println!("  category:  {} [{}]", category.name, category.slug);
    }
    let tags: Vec<_> = detail.tags.iter().map(|t| t.name.as_str()).collect();
    println!("  tags:      {}", tags.join(", "));
    println!("  published: {}", helpers.date(&post.published_at));
    println!(
        "  updated:   {} ({})",
        helpers.date(&post.updated_at),
        helpers.ago(&post.updated_at)
    );
    println!("  read time: {} min", post.read_time);
    println!(
        "  stats:     {} views, {} likes{}",
        helpers.number(post.views),
        helpers.number(post.likes),
        if post.featured { ", featured" } else { "" }
    );
    if !post.excerpt.is_empty() {
        println!();
        println!("{}", post.excerpt);
    }

    println!();
    println!("Related ({}):", detail.related.len());
    for related in &detail.related {
        println!("{}", post_line(&helpers, related));
    }

    Ok(())
}

//! Shared text/JSON output for post listings

use anyhow::Result;
use serde::Serialize;

use crate::content::Post;
use crate::helpers::Helpers;
use crate::Blog;

/// One-line summary of a post
pub(crate) fn post_line(helpers: &Helpers, post: &Post) -> String {
    format!(
        "  {} - {} [{}] ({} views, {} likes)",
        helpers.date(&post.published_at),
        post.title,
        post.slug,
        helpers.number(post.views),
        helpers.number(post.likes)
    )
}

/// Print a listing under a heading, or as a JSON array
pub(crate) fn print_posts(blog: &Blog, heading: &str, posts: &[&Post], json: bool) -> Result<()> {
    if json {
        return print_json(&posts);
    }

    let helpers = Helpers::new(&blog.config);
    println!("{} ({}):", heading, posts.len());
    for post in posts {
        println!("{}", post_line(&helpers, post));
    }
    Ok(())
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

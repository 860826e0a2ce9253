//! Post listings: latest, featured, by category, tag or author, related

use anyhow::Result;

use super::output::print_posts;
use crate::Blog;

/// A listing of published posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Latest(usize),
    Featured(usize),
    Category(String),
    Tag(String),
    Author(String),
    Related { post_id: String, limit: usize },
}

impl Listing {
    fn heading(&self) -> String {
        match self {
            Listing::Latest(_) => "Latest posts".to_string(),
            Listing::Featured(_) => "Featured posts".to_string(),
            Listing::Category(slug) => format!("Category {}", slug),
            Listing::Tag(slug) => format!("Tag {}", slug),
            Listing::Author(id) => format!("Author {}", id),
            Listing::Related { post_id, .. } => format!("Related to post {}", post_id),
        }
    }
}

/// Print a listing
pub fn run(blog: &Blog, listing: &Listing, json: bool) -> Result<()> {
    let query = blog.query();

    let posts = match listing {
        Listing::Latest(n) => query.latest(*n),
        Listing::Featured(n) => query.featured(*n),
        Listing::Category(slug) => {
            if blog.catalog.category_by_slug(slug).is_none() {
                tracing::warn!("No category with slug {:?}", slug);
            }
            query.by_category(slug)
        }
        Listing::Tag(slug) => {
            if blog.catalog.tag_by_slug(slug).is_none() {
                tracing::warn!("No tag with slug {:?}", slug);
            }
            query.by_tag(slug)
        }
        Listing::Author(id) => {
            if blog.catalog.author(id).is_none() {
                tracing::warn!("No author with id {:?}", id);
            }
            query.by_author(id)
        }
        Listing::Related { post_id, limit } => {
            if blog.catalog.post(post_id).is_none() {
                tracing::warn!("No post with id {:?}", post_id);
            }
            query.related(post_id, *limit)
        }
    };

    print_posts(blog, &listing.heading(), &posts, json)
}

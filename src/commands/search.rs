//! Full-text search, quick lookup and the filtered blog listing

use anyhow::Result;

use super::output::{print_json, print_posts};
use crate::query::FilterCriteria;
use crate::Blog;

/// Search published posts and list matching categories, authors and tags
pub fn run(blog: &Blog, query_text: &str, json: bool) -> Result<()> {
    let query = blog.query();
    let posts = query.search(query_text);

    if json {
        let lookup = query.lookup(query_text, blog.config.lookup_limit);
        return print_json(&serde_json::json!({
            "posts": posts,
            "categories": lookup.categories,
            "authors": lookup.authors,
            "tags": lookup.tags,
        }));
    }

    print_posts(blog, &format!("Posts matching {:?}", query_text), &posts, false)?;

    let lookup = query.lookup(query_text, blog.config.lookup_limit);
    for category in &lookup.categories {
        println!("Category: {} [{}]", category.name, category.slug);
    }
    for author in &lookup.authors {
        println!("Author: {} - {} [{}]", author.name, author.role, author.id);
    }
    for tag in &lookup.tags {
        println!("Tag: {} [{}]", tag.name, tag.slug);
    }

    Ok(())
}

/// Print the blog listing for a set of criteria
pub fn filter(blog: &Blog, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let posts = blog.query().filter_and_sort(criteria);
    let heading = format!("Posts ({}, sorted by {})", criteria.category, criteria.sort);
    print_posts(blog, &heading, &posts, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Catalog, ContentSource};
    use crate::query::SortMode;

    fn blog() -> Blog {
        let catalog = Catalog::build(ContentSource::builtin().unwrap(), 200).unwrap();
        Blog::with_catalog(SiteConfig::default(), catalog)
    }

    #[test]
    fn test_search_prints() {
        let blog = blog();
        assert!(run(&blog, "go", false).is_ok());
        assert!(run(&blog, "data", true).is_ok());
        assert!(run(&blog, "", false).is_ok());
    }

    #[test]
    fn test_filter_prints() {
        let blog = blog();
        let criteria = FilterCriteria::new()
            .in_category("backend-apis")
            .tag("jwt")
            .sort(SortMode::MostLiked);
        assert!(filter(&blog, &criteria, false).is_ok());
        assert!(filter(&blog, &criteria, true).is_ok());
    }
}

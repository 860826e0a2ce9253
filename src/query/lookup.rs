//! Quick lookup across posts, categories, authors and tags

use serde::Serialize;

use super::criteria::search_needle;
use super::engine::{contains_ignore_case, ContentQuery};
use crate::content::{Author, Category, Post, Tag};

/// Grouped lookup results, each group in catalog order
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Lookup<'a> {
    pub posts: Vec<&'a Post>,
    pub categories: Vec<&'a Category>,
    pub authors: Vec<&'a Author>,
    pub tags: Vec<&'a Tag>,
}

impl Lookup<'_> {
    pub fn len(&self) -> usize {
        self.posts.len() + self.categories.len() + self.authors.len() + self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> ContentQuery<'a> {
    /// Match `query` against post titles and excerpts, and against category,
    /// author and tag names. Posts and tags are capped at `limit` each.
    /// A blank query finds nothing.
    pub fn lookup(&self, query: &str, limit: usize) -> Lookup<'a> {
        let Some(needle) = search_needle(query) else {
            return Lookup::default();
        };
        let catalog = self.catalog();

        Lookup {
            posts: catalog
                .posts()
                .filter(|p| p.is_published())
                .filter(|p| {
                    contains_ignore_case(&p.title, &needle)
                        || contains_ignore_case(&p.excerpt, &needle)
                })
                .take(limit)
                .collect(),
            categories: catalog
                .categories()
                .filter(|c| contains_ignore_case(&c.name, &needle))
                .collect(),
            authors: catalog
                .authors()
                .filter(|a| contains_ignore_case(&a.name, &needle))
                .collect(),
            tags: catalog
                .tags()
                .filter(|t| contains_ignore_case(&t.name, &needle))
                .take(limit)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{Catalog, ContentSource};
    use crate::query::ContentQuery;

    fn builtin() -> Catalog {
        Catalog::build(ContentSource::builtin().unwrap(), 200).unwrap()
    }

    #[test]
    fn test_lookup_groups() {
        let catalog = builtin();
        let query = ContentQuery::new(&catalog);

        let found = query.lookup("data", 5);
        let categories: Vec<_> = found.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(categories, vec!["data-science"]);
        assert!(found.authors.is_empty());
        assert!(!found.posts.is_empty());
        assert!(found.posts.len() <= 5);
    }

    #[test]
    fn test_lookup_authors_and_tags() {
        let catalog = builtin();
        let query = ContentQuery::new(&catalog);

        let found = query.lookup("Chen", 5);
        assert_eq!(found.authors.len(), 1);
        assert_eq!(found.authors[0].name, "Alexandra Chen");

        let found = query.lookup("script", 5);
        let tags: Vec<_> = found.tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(tags, vec!["typescript"]);
    }

    #[test]
    fn test_lookup_limits_posts_and_tags() {
        let catalog = builtin();
        let query = ContentQuery::new(&catalog);

        let found = query.lookup("e", 2);
        assert_eq!(found.posts.len(), 2);
        assert_eq!(found.tags.len(), 2);
        assert!(found.categories.len() > 2);
    }

    #[test]
    fn test_blank_lookup_is_empty() {
        let catalog = builtin();
        let query = ContentQuery::new(&catalog);
        assert!(query.lookup("", 5).is_empty());
        assert!(query.lookup("  ", 5).is_empty());
    }
}

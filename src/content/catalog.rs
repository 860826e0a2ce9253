//! Validated, read-only snapshot of all site content

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::loader::ContentSource;
use super::{Author, Category, Post, Tag};
use crate::helpers::estimate_read_time;

/// Content that violates the data model invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("Invalid {kind} slug: {slug:?}")]
    InvalidSlug { kind: &'static str, slug: String },

    #[error("Post {post} references unknown {kind}: {id}")]
    UnknownReference {
        post: String,
        kind: &'static str,
        id: String,
    },

    #[error("Post {post} lists tag {tag} more than once")]
    DuplicateTag { post: String, tag: String },
}

/// All authors, categories, tags and posts, indexed by id in source order.
///
/// A catalog is only ever built whole: either every invariant holds or
/// `Catalog::build` fails and nothing is returned.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: IndexMap<String, Author>,
    categories: IndexMap<String, Category>,
    tags: IndexMap<String, Tag>,
    posts: IndexMap<String, Post>,
    post_slugs: HashMap<String, String>,
    category_slugs: HashMap<String, String>,
    tag_slugs: HashMap<String, String>,
}

impl Catalog {
    /// Validate a content source and freeze it into a catalog.
    ///
    /// Posts without a reading time get one estimated from their body at
    /// `words_per_minute`.
    pub fn build(source: ContentSource, words_per_minute: u32) -> Result<Self, CatalogError> {
        let authors = index_by_id("author", source.authors, |a| &a.id)?;
        let categories = index_by_id("category", source.categories, |c| &c.id)?;
        let tags = index_by_id("tag", source.tags, |t| &t.id)?;

        let category_slugs = index_slugs("category", categories.values().map(|c| (&c.slug, &c.id)))?;
        let tag_slugs = index_slugs("tag", tags.values().map(|t| (&t.slug, &t.id)))?;

        let mut posts = IndexMap::with_capacity(source.posts.len());
        for mut post in source.posts {
            check_references(&post, &authors, &categories, &tags)?;
            if post.read_time == 0 {
                post.read_time = estimate_read_time(&post.content, words_per_minute);
            }
            if posts.contains_key(&post.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "post",
                    id: post.id,
                });
            }
            posts.insert(post.id.clone(), post);
        }
        let post_slugs = index_slugs("post", posts.values().map(|p| (&p.slug, &p.id)))?;

        let catalog = Self {
            authors,
            categories,
            tags,
            posts,
            post_slugs,
            category_slugs,
            tag_slugs,
        };
        catalog.log_stale_counts();

        tracing::debug!(
            "Built catalog: {} posts, {} authors, {} categories, {} tags",
            catalog.posts.len(),
            catalog.authors.len(),
            catalog.categories.len(),
            catalog.tags.len()
        );

        Ok(catalog)
    }

    /// All posts in source order, drafts included
    pub fn posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.posts.values()
    }

    pub fn authors(&self) -> impl Iterator<Item = &Author> + '_ {
        self.authors.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.values()
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.tags.values()
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.post_slugs.get(slug).and_then(|id| self.posts.get(id))
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.category_slugs
            .get(slug)
            .and_then(|id| self.categories.get(id))
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }

    pub fn tag_by_slug(&self, slug: &str) -> Option<&Tag> {
        self.tag_slugs.get(slug).and_then(|id| self.tags.get(id))
    }

    /// Resolved tags of a post, in the post's order
    pub fn tags_of<'a>(&'a self, post: &'a Post) -> impl Iterator<Item = &'a Tag> + 'a {
        post.tags.iter().filter_map(move |id| self.tags.get(id))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn log_stale_counts(&self) {
        for category in self.categories.values() {
            let live = self
                .posts
                .values()
                .filter(|p| p.is_published() && p.category == category.id)
                .count();
            if live != category.post_count {
                tracing::debug!(
                    "Category {} lists {} posts, {} published",
                    category.slug,
                    category.post_count,
                    live
                );
            }
        }
    }
}

fn index_by_id<T>(
    kind: &'static str,
    items: Vec<T>,
    id: impl Fn(&T) -> &String,
) -> Result<IndexMap<String, T>, CatalogError> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        let key = id(&item).clone();
        if map.contains_key(&key) {
            return Err(CatalogError::DuplicateId { kind, id: key });
        }
        map.insert(key, item);
    }
    Ok(map)
}

fn index_slugs<'a>(
    kind: &'static str,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<HashMap<String, String>, CatalogError> {
    let mut map = HashMap::new();
    for (slug, id) in entries {
        if !is_url_safe(slug) {
            return Err(CatalogError::InvalidSlug {
                kind,
                slug: slug.clone(),
            });
        }
        if map.insert(slug.clone(), id.clone()).is_some() {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.clone(),
            });
        }
    }
    Ok(map)
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && slug::slugify(slug) == slug
}

fn check_references(
    post: &Post,
    authors: &IndexMap<String, Author>,
    categories: &IndexMap<String, Category>,
    tags: &IndexMap<String, Tag>,
) -> Result<(), CatalogError> {
    let unknown = |kind: &'static str, id: &str| CatalogError::UnknownReference {
        post: post.id.clone(),
        kind,
        id: id.to_string(),
    };

    if !authors.contains_key(&post.author) {
        return Err(unknown("author", &post.author));
    }
    if !categories.contains_key(&post.category) {
        return Err(unknown("category", &post.category));
    }

    let mut seen = HashSet::new();
    for tag in &post.tags {
        if !tags.contains_key(tag) {
            return Err(unknown("tag", tag));
        }
        if !seen.insert(tag.as_str()) {
            return Err(CatalogError::DuplicateTag {
                post: post.id.clone(),
                tag: tag.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn source() -> ContentSource {
        let date = Utc.with_ymd_and_hms(2024, 11, 25, 10, 0, 0).unwrap();
        let mut post = Post::new("1", "Building REST APIs with Go", date, "a1", "c1");
        post.tags = vec!["t1".to_string(), "t2".to_string()];
        ContentSource {
            authors: vec![Author::new("a1", "Marcus Williams")],
            categories: vec![Category::new("c1", "Backend & APIs")],
            tags: vec![Tag::new("t1", "Go"), Tag::new("t2", "REST API")],
            posts: vec![post],
        }
    }

    #[test]
    fn test_build_and_lookup() {
        let catalog = Catalog::build(source(), 200).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.post_by_slug("building-rest-apis-with-go").map(|p| p.id.as_str()),
            Some("1")
        );
        assert_eq!(catalog.category_by_slug("backend-apis").unwrap().id, "c1");
        assert_eq!(catalog.tag_by_slug("rest-api").unwrap().name, "REST API");
        assert!(catalog.post_by_slug("missing").is_none());

        let post = catalog.post("1").unwrap();
        let names: Vec<_> = catalog.tags_of(post).map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "REST API"]);
    }

    #[test]
    fn test_estimates_missing_read_time() {
        let mut src = source();
        src.posts[0].content = "word ".repeat(450);
        let catalog = Catalog::build(src, 200).unwrap();
        assert_eq!(catalog.post("1").unwrap().read_time, 3);
    }

    #[test]
    fn test_keeps_explicit_read_time() {
        let mut src = source();
        src.posts[0].read_time = 15;
        let catalog = Catalog::build(src, 200).unwrap();
        assert_eq!(catalog.post("1").unwrap().read_time, 15);
    }

    #[test]
    fn test_rejects_duplicate_post_slug() {
        let mut src = source();
        let mut copy = src.posts[0].clone();
        copy.id = "2".to_string();
        src.posts.push(copy);
        assert_eq!(
            Catalog::build(src, 200).unwrap_err(),
            CatalogError::DuplicateSlug {
                kind: "post",
                slug: "building-rest-apis-with-go".to_string()
            }
        );
    }

    #[test]
    fn test_slug_namespaces_are_independent() {
        let mut src = source();
        src.tags.push(Tag {
            id: "t3".to_string(),
            name: "Backend".to_string(),
            slug: "backend-apis".to_string(),
        });
        assert!(Catalog::build(src, 200).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut src = source();
        src.tags.push(Tag::new("t1", "Docker"));
        assert_eq!(
            Catalog::build(src, 200).unwrap_err(),
            CatalogError::DuplicateId {
                kind: "tag",
                id: "t1".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_unsafe_slug() {
        let mut src = source();
        src.categories[0].slug = "Backend APIs".to_string();
        assert!(matches!(
            Catalog::build(src, 200),
            Err(CatalogError::InvalidSlug { kind: "category", .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_references() {
        let mut src = source();
        src.posts[0].category = "c9".to_string();
        assert_eq!(
            Catalog::build(src, 200).unwrap_err(),
            CatalogError::UnknownReference {
                post: "1".to_string(),
                kind: "category",
                id: "c9".to_string()
            }
        );

        let mut src = source();
        src.posts[0].author = "nobody".to_string();
        assert!(matches!(
            Catalog::build(src, 200),
            Err(CatalogError::UnknownReference { kind: "author", .. })
        ));

        let mut src = source();
        src.posts[0].tags.push("t9".to_string());
        assert!(matches!(
            Catalog::build(src, 200),
            Err(CatalogError::UnknownReference { kind: "tag", .. })
        ));
    }

    #[test]
    fn test_rejects_repeated_tag() {
        let mut src = source();
        src.posts[0].tags.push("t1".to_string());
        assert_eq!(
            Catalog::build(src, 200).unwrap_err(),
            CatalogError::DuplicateTag {
                post: "1".to_string(),
                tag: "t1".to_string()
            }
        );
    }
}

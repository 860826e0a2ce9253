//! Read-only queries over a catalog

use std::collections::HashSet;

use super::criteria::{search_needle, CategoryFilter, FilterCriteria, SortMode};
use crate::content::{Catalog, Category, Post, Tag};

/// Query engine borrowing a catalog.
///
/// Every operation is a bounded traversal of the catalog. Nothing is cached
/// or mutated, so repeated calls over the same catalog give equal results.
/// Public listings only ever contain published posts; `by_slug` is the one
/// lookup that also sees drafts and archived posts.
#[derive(Debug, Clone, Copy)]
pub struct ContentQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> ContentQuery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn published(&self) -> impl Iterator<Item = &'a Post> + 'a {
        let catalog = self.catalog;
        catalog.posts().filter(|p| p.is_published())
    }

    /// Published posts in source order
    pub fn list_published(&self) -> Vec<&'a Post> {
        self.published().collect()
    }

    /// The `n` most recently published posts, newest first
    pub fn latest(&self, n: usize) -> Vec<&'a Post> {
        let mut posts = self.list_published();
        sort_posts(&mut posts, SortMode::Latest);
        posts.truncate(n);
        posts
    }

    /// The first `n` featured posts in source order.
    ///
    /// No recency ordering is applied; callers wanting the freshest
    /// featured posts sort the catalog themselves.
    pub fn featured(&self, n: usize) -> Vec<&'a Post> {
        self.published().filter(|p| p.featured).take(n).collect()
    }

    /// Published posts in the category with the given slug
    pub fn by_category(&self, category_slug: &str) -> Vec<&'a Post> {
        match self.catalog.category_by_slug(category_slug) {
            Some(category) => {
                let id = category.id.as_str();
                self.published().filter(|p| p.category == id).collect()
            }
            None => Vec::new(),
        }
    }

    /// Published posts carrying the tag with the given slug
    pub fn by_tag(&self, tag_slug: &str) -> Vec<&'a Post> {
        match self.catalog.tag_by_slug(tag_slug) {
            Some(tag) => {
                let id = tag.id.as_str();
                self.published().filter(|p| p.has_tag(id)).collect()
            }
            None => Vec::new(),
        }
    }

    /// Published posts written by the author with the given id
    pub fn by_author(&self, author_id: &str) -> Vec<&'a Post> {
        self.published().filter(|p| p.author == author_id).collect()
    }

    /// Any post with exactly this slug, whatever its status
    pub fn by_slug(&self, slug: &str) -> Option<&'a Post> {
        self.catalog.post_by_slug(slug)
    }

    /// Up to `n` published posts sharing a category or a tag with the post
    /// `post_id`, in source order. Unknown ids give no related posts.
    pub fn related(&self, post_id: &str, n: usize) -> Vec<&'a Post> {
        let Some(current) = self.catalog.post(post_id) else {
            return Vec::new();
        };

        self.published()
            .filter(|p| p.id != current.id && p.is_related_to(current))
            .take(n)
            .collect()
    }

    /// Published posts whose title, excerpt, tag names or category name
    /// contain `query`, ignoring case. A blank query matches every post;
    /// any other query is matched as given, whitespace included.
    pub fn search(&self, query: &str) -> Vec<&'a Post> {
        let Some(needle) = search_needle(query) else {
            return self.list_published();
        };

        let posts: Vec<_> = self
            .published()
            .filter(|p| self.matches_search(p, &needle))
            .collect();
        tracing::debug!("Search {:?} matched {} posts", query, posts.len());
        posts
    }

    fn matches_search(&self, post: &Post, needle: &str) -> bool {
        contains_ignore_case(&post.title, needle)
            || contains_ignore_case(&post.excerpt, needle)
            || self
                .catalog
                .tags_of(post)
                .any(|t| contains_ignore_case(&t.name, needle))
            || self
                .catalog
                .category(&post.category)
                .is_some_and(|c| contains_ignore_case(&c.name, needle))
    }

    /// Blog listing: filter published posts by category, title/excerpt
    /// query and tags, then sort.
    ///
    /// An empty query skips the text filter; any other query, even one of
    /// only spaces, must appear verbatim (ignoring case) in the title or
    /// excerpt. Tags widen rather than narrow: a post matches when it
    /// carries any one of the requested tags. Ties keep source order.
    pub fn filter_and_sort(&self, criteria: &FilterCriteria) -> Vec<&'a Post> {
        let category_id = match &criteria.category {
            CategoryFilter::All => None,
            CategoryFilter::Slug(slug) => match self.catalog.category_by_slug(slug) {
                Some(category) => Some(category.id.as_str()),
                None => return Vec::new(),
            },
        };

        let tag_ids: Option<HashSet<&str>> = if criteria.tags.is_empty() {
            None
        } else {
            let ids: HashSet<_> = criteria
                .tags
                .iter()
                .filter_map(|slug| self.catalog.tag_by_slug(slug))
                .map(|t| t.id.as_str())
                .collect();
            if ids.is_empty() {
                return Vec::new();
            }
            Some(ids)
        };

        let needle = criteria.needle();

        let mut posts: Vec<_> = self
            .published()
            .filter(|p| category_id.map_or(true, |id| p.category == id))
            .filter(|p| {
                needle.as_deref().map_or(true, |n| {
                    contains_ignore_case(&p.title, n) || contains_ignore_case(&p.excerpt, n)
                })
            })
            .filter(|p| {
                tag_ids
                    .as_ref()
                    .map_or(true, |ids| p.tags.iter().any(|t| ids.contains(t.as_str())))
            })
            .collect();
        sort_posts(&mut posts, criteria.sort);

        tracing::debug!(
            "Filter (query={:?}, category={}, tags={:?}, sort={}) matched {} posts",
            criteria.query,
            criteria.category,
            criteria.tags,
            criteria.sort,
            posts.len()
        );
        posts
    }

    /// Live published-post count for every category, in catalog order
    pub fn category_counts(&self) -> Vec<(&'a Category, usize)> {
        let catalog = self.catalog;
        catalog
            .categories()
            .map(|c| {
                let count = self.published().filter(|p| p.category == c.id).count();
                (c, count)
            })
            .collect()
    }

    /// Live published-post count for every tag, in catalog order
    pub fn tag_counts(&self) -> Vec<(&'a Tag, usize)> {
        let catalog = self.catalog;
        catalog
            .tags()
            .map(|t| {
                let count = self.published().filter(|p| p.has_tag(&t.id)).count();
                (t, count)
            })
            .collect()
    }
}

/// Stable sort of a listing; equal keys keep their relative order
pub fn sort_posts(posts: &mut [&Post], sort: SortMode) {
    match sort {
        SortMode::Latest => posts.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        SortMode::Oldest => posts.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
        SortMode::MostViewed => posts.sort_by(|a, b| b.views.cmp(&a.views)),
        SortMode::MostLiked => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
}

/// `needle` must already be lowercase
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

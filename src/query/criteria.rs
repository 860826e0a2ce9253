//! Typed filter criteria for the blog listing

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Criteria rejected at the boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown sort mode: {0:?} (expected latest, oldest, most-viewed or most-liked)")]
    UnknownSortMode(String),

    #[error("Category filter must be \"all\" or a category slug")]
    EmptyCategory,
}

/// Ordering applied to a filtered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Newest first
    #[default]
    Latest,
    /// Oldest first
    Oldest,
    /// Most views first
    #[serde(alias = "popular")]
    MostViewed,
    /// Most likes first
    #[serde(alias = "trending")]
    MostLiked,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Oldest => "oldest",
            SortMode::MostViewed => "most-viewed",
            SortMode::MostLiked => "most-liked",
        }
    }
}

impl FromStr for SortMode {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(SortMode::Latest),
            "oldest" => Ok(SortMode::Oldest),
            "most-viewed" | "popular" => Ok(SortMode::MostViewed),
            "most-liked" | "trending" => Ok(SortMode::MostLiked),
            _ => Err(CriteriaError::UnknownSortMode(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category restriction: every category, or one category by slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Slug(String),
}

impl FromStr for CategoryFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(CriteriaError::EmptyCategory),
            "all" => Ok(CategoryFilter::All),
            slug => Ok(CategoryFilter::Slug(slug.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Search query, category, tag set and sort order for a listing.
///
/// All restrictions are combined with AND; the tag set itself matches posts
/// carrying any one of its tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
    pub tags: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Restrict to a category slug
    pub fn in_category(self, slug: impl Into<String>) -> Self {
        self.category(CategoryFilter::Slug(slug.into()))
    }

    pub fn tag(mut self, slug: impl Into<String>) -> Self {
        self.tags.insert(slug.into());
        self
    }

    pub fn tags<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(slugs.into_iter().map(Into::into));
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased query, or `None` when no query was given. Whitespace is
    /// part of the substring to match.
    pub(crate) fn needle(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.to_lowercase())
    }
}

/// Lowercased query for free-text search, or `None` when it is blank.
/// Only the blank check ignores surrounding whitespace.
pub(crate) fn search_needle(query: &str) -> Option<String> {
    (!query.trim().is_empty()).then(|| query.to_lowercase())
}

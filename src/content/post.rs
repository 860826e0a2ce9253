//! Post, Author, Category and Tag models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Accepts either a single id or a list of ids
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Lifecycle status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl PostStatus {
    pub fn is_published(self) -> bool {
        self == PostStatus::Published
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post id
    pub id: String,

    /// Post title
    pub title: String,

    /// Slug (URL-friendly name), unique among posts
    pub slug: String,

    /// Short summary shown in listings
    #[serde(default)]
    pub excerpt: String,

    /// Article body, opaque to queries
    #[serde(default)]
    pub content: String,

    /// Cover image path or URL
    #[serde(default)]
    pub cover_image: String,

    /// Author id
    pub author: String,

    /// Category id
    pub category: String,

    /// Tag ids, in display order
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,

    /// Publication date
    pub published_at: DateTime<Utc>,

    /// Last updated date
    pub updated_at: DateTime<Utc>,

    /// Estimated reading time in minutes. Zero in a content file means
    /// "estimate from the body" and is replaced when the catalog is built.
    #[serde(default)]
    pub read_time: u32,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub likes: u64,

    /// Editorial flag for promotional placement
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub status: PostStatus,
}

impl Post {
    /// Create a new published post with minimal required fields
    pub fn new(
        id: &str,
        title: &str,
        published_at: DateTime<Utc>,
        author: &str,
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            slug: slug::slugify(title),
            excerpt: String::new(),
            content: String::new(),
            cover_image: String::new(),
            author: author.to_string(),
            category: category.to_string(),
            tags: Vec::new(),
            published_at,
            updated_at: published_at,
            read_time: 0,
            views: 0,
            likes: 0,
            featured: false,
            status: PostStatus::Published,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }

    /// Whether this post shares its category or at least one tag with `other`
    pub fn is_related_to(&self, other: &Post) -> bool {
        self.category == other.category || self.tags.iter().any(|t| other.has_tag(t))
    }
}

/// A post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    /// Role title, e.g. "Senior AI Engineer"
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Author {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: String::new(),
            role: String::new(),
            bio: String::new(),
            twitter: None,
            github: None,
            linkedin: None,
        }
    }
}

/// A post category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Color token used by the site's styling
    #[serde(default)]
    pub color: String,
    /// Editorial post count; may disagree with the live count
    #[serde(default)]
    pub post_count: usize,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug::slugify(name),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            post_count: 0,
        }
    }
}

/// A post tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug::slugify(name),
        }
    }
}

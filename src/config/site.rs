//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::query::SortMode;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,

    // Content
    /// Content file relative to the base directory. Without one,
    /// `content.yml` is used when present, otherwise the built-in content.
    pub content_file: Option<String>,
    pub words_per_minute: u32,

    // Listings
    pub featured_limit: usize,
    pub latest_limit: usize,
    pub related_limit: usize,
    pub lookup_limit: usize,
    pub default_sort: SortMode,

    // Date format (Moment.js style)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "CodeCraft Engineering Blog".to_string(),
            description: "Cutting-edge insights on AI/ML, Data Science, and Software Engineering."
                .to_string(),
            author: "CodeCraft".to_string(),
            language: "en-US".to_string(),
            url: "https://engineeringinsights.dev".to_string(),

            content_file: None,
            words_per_minute: 200,

            featured_limit: 4,
            latest_limit: 6,
            related_limit: 3,
            lookup_limit: 5,
            default_sort: SortMode::Latest,

            date_format: "MMMM D, YYYY".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.words_per_minute == 0 {
            anyhow::bail!("words_per_minute must be greater than zero");
        }
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

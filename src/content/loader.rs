//! Content loader - reads the content file (or the built-in seed) into a catalog

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Author, Catalog, Category, Post, Tag};
use crate::config::SiteConfig;

/// Content file looked up in the base directory when none is configured
pub const DEFAULT_CONTENT_FILE: &str = "content.yml";

/// Seed content shipped with the binary
const BUILTIN_CONTENT: &str = include_str!("../../data/content.yml");

/// Raw, unvalidated content as it appears in a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSource {
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub posts: Vec<Post>,
}

impl ContentSource {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The seed content embedded in the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_CONTENT).context("Built-in content is malformed")
    }

    /// Read a content file, choosing the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {:?}", path))?;

        let source = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content),
            _ => bail!(
                "Unsupported content file {:?}: expected .yml, .yaml or .json",
                path
            ),
        };
        source.with_context(|| format!("Failed to parse content file {:?}", path))
    }
}

/// Loads the site catalog according to the site configuration
pub struct ContentLoader<'a> {
    config: &'a SiteConfig,
    base_dir: &'a Path,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(config: &'a SiteConfig, base_dir: &'a Path) -> Self {
        Self { config, base_dir }
    }

    /// Path of the content file to read, if any.
    ///
    /// A configured file must exist. Without one, `content.yml` in the base
    /// directory is used when present.
    pub fn content_path(&self) -> Result<Option<PathBuf>> {
        match &self.config.content_file {
            Some(file) => {
                let path = self.base_dir.join(file);
                if !path.exists() {
                    bail!("Content file not found: {:?}", path);
                }
                Ok(Some(path))
            }
            None => {
                let path = self.base_dir.join(DEFAULT_CONTENT_FILE);
                Ok(path.exists().then_some(path))
            }
        }
    }

    /// Load and validate the catalog
    pub fn load(&self) -> Result<Catalog> {
        let (source, origin) = match self.content_path()? {
            Some(path) => {
                tracing::debug!("Loading content from {:?}", path);
                (ContentSource::load(&path)?, format!("{:?}", path))
            }
            None => {
                tracing::debug!("No content file found, using built-in content");
                (ContentSource::builtin()?, "built-in content".to_string())
            }
        };

        let catalog = Catalog::build(source, self.config.words_per_minute)
            .with_context(|| format!("Invalid content in {}", origin))?;
        tracing::info!(
            "Loaded {} posts ({} published)",
            catalog.len(),
            catalog.posts().filter(|p| p.is_published()).count()
        );
        Ok(catalog)
    }
}

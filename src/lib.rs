//! codecraft: content query engine for the CodeCraft engineering blog
//!
//! This crate holds the blog's posts, authors, categories and tags as a
//! validated read-only catalog and answers the listing, search and
//! filtering queries the site's pages are built from.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod query;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::{Catalog, ContentLoader};
use query::ContentQuery;

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Loaded content
    pub catalog: Catalog,
}

impl Blog {
    /// Create a new blog from a directory, reading `_config.yml` and the
    /// content file when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        let catalog = ContentLoader::new(&config, &base_dir).load()?;

        Ok(Self {
            config,
            base_dir,
            catalog,
        })
    }

    /// Build a blog around an already loaded catalog
    pub fn with_catalog(config: config::SiteConfig, catalog: Catalog) -> Self {
        Self {
            config,
            base_dir: PathBuf::from("."),
            catalog,
        }
    }

    /// Query engine over this blog's catalog
    pub fn query(&self) -> ContentQuery<'_> {
        ContentQuery::new(&self.catalog)
    }
}

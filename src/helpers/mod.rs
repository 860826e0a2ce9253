//! Helper functions for formatting query results
//!
//! Date, number and reading-time helpers shared by the command output.

mod date;
mod format;

pub use date::*;
pub use format::*;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;

/// Formatting helpers bound to the site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Format a date with the configured date format
    pub fn date(&self, date: &DateTime<Utc>) -> String {
        format_date(date, &self.config.date_format)
    }

    /// Compact view/like count
    pub fn number(&self, n: u64) -> String {
        format_number(n)
    }

    /// Time elapsed since `date`
    pub fn ago(&self, date: &DateTime<Utc>) -> String {
        relative_date(date, Utc::now())
    }
}

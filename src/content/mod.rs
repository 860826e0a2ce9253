//! Content module - posts, authors, categories, tags and the catalog holding them

mod catalog;
pub mod loader;
mod post;

pub use catalog::{Catalog, CatalogError};
pub use loader::{ContentLoader, ContentSource};
pub use post::{Author, Category, Post, PostStatus, Tag};

//! Query module - listings, search and filtering over the content catalog

mod criteria;
mod engine;
mod lookup;

pub use criteria::{CategoryFilter, CriteriaError, FilterCriteria, SortMode};
pub use engine::{sort_posts, ContentQuery};
pub use lookup::Lookup;

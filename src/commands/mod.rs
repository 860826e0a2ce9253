//! Command implementations behind the CLI

pub mod check;
pub mod list;
pub mod posts;
pub mod search;
pub mod show;

mod output;

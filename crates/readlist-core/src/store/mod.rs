//! Persistent reading-list item store (SQLite via sqlx).
//!
//! Stores titles, canonical URLs, content hashes, tags, and lifecycle
//! status for saved pages.

mod db;
mod items;
mod types;

pub use db::{is_unique_violation, ItemDb};
#[cfg(test)]
pub(crate) use db::open_memory;
pub use types::*;

//! Data models for preview lookups.
//!
//! - [`SelectionKey`] - Index key taken from the highlighted fuzzy-finder row
//! - [`IndexRecord`] - A single `<index>\t<base64-payload>` line from the index file

pub mod record;
pub mod selection;

pub use record::IndexRecord;
pub use selection::SelectionKey;

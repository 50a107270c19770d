//! Index file lookup
//!
//! The index file is small and regenerated by the caller for every fuzzy-finder session,
//! so lookups are a single linear pass with no in-memory index. Matching is exact string
//! equality on the index column and the first matching line wins.

pub mod scan;

pub use scan::{find_payload, find_payload_in_file};

//! Lookup-and-decode pipeline behind a fuzzy-finder preview pane
//!
//! # Error Handling Strategy
//!
//! The preview pane shows whatever this program writes to stdout, so a diagnostic there
//! would be worse than a blank preview. [`resolve_preview`] therefore reports every failure
//! through one typed [`PreviewError`], and the CLI layer turns all of them into the same
//! outcome: no output, exit status 0.

pub mod error;

use std::path::Path;

pub use error::PreviewError;

use crate::decode::decode_payload;
use crate::lookup::find_payload_in_file;
use crate::models::SelectionKey;

/// Resolve the text to preview for `selection` using the records in `index_file`
///
/// # Errors
///
/// Returns the [`PreviewError`] variant describing why nothing can be shown.
pub fn resolve_preview(index_file: &Path, selection: &str) -> Result<String, PreviewError> {
    let key = SelectionKey::parse(selection)
        .ok_or_else(|| PreviewError::MalformedSelection(selection.to_string()))?;

    let payload = find_payload_in_file(index_file, &key)?
        .ok_or_else(|| PreviewError::NoMatch(key.to_string()))?;

    if payload.is_empty() {
        return Err(PreviewError::EmptyPayload(key.to_string()));
    }

    decode_payload(&payload)
}

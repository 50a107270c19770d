//! fzf-preview - Decode the payload behind a fuzzy-finder selection
//!
//! A fuzzy-finder preview hook calls this with an index file of
//! `<index>\t<base64-payload>` lines and the highlighted row, e.g. `"12. git status"`.
//! The row's leading number selects a record, and its payload is base64-decoded and
//! printed as-is. Any failure yields a blank preview and exit status 0.
//!
//! # Example
//!
//! ```no_run
//! use fzf_preview::resolve_preview;
//! use std::path::Path;
//!
//! let text = resolve_preview(Path::new("/tmp/commands.idx"), "7. something")?;
//! print!("{text}");
//! # Ok::<(), fzf_preview::PreviewError>(())
//! ```

pub mod cli;
pub mod decode;
pub mod lookup;
pub mod models;
pub mod preview;
pub mod utils;

// Re-export commonly used types
pub use decode::decode_payload;
pub use lookup::find_payload;
pub use models::{IndexRecord, SelectionKey};
pub use preview::{PreviewError, resolve_preview};

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Every reason a preview can come out empty
///
/// None of these reach the user. The CLI layer logs them at debug level and exits 0.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("expected <index-file> <selection> arguments")]
    InsufficientArguments,

    #[error("selection {0:?} does not start with a numeric index")]
    MalformedSelection(String),

    #[error("cannot read index file: {0}")]
    FileAccess(#[from] io::Error),

    #[error("no record for index {0}")]
    NoMatch(String),

    #[error("record for index {0} has an empty payload")]
    EmptyPayload(String),

    #[error("payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl PreviewError {
    /// Short machine-friendly label used as a structured log field
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InsufficientArguments => "insufficient_arguments",
            Self::MalformedSelection(_) => "malformed_selection",
            Self::FileAccess(_) => "file_access",
            Self::NoMatch(_) => "no_match",
            Self::EmptyPayload(_) => "empty_payload",
            Self::InvalidBase64(_) => "invalid_base64",
            Self::InvalidUtf8(_) => "invalid_utf8",
        }
    }
}

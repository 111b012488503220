//! Error taxonomy for the layout engine.
//!
//! DESIGN
//! ======
//! Three families, none of them fatal:
//!
//! - [`ValidationError`]: an operation was refused; the layout is untouched.
//! - [`DecodeError`]: persisted or shared text could not be turned into a
//!   layout; the caller keeps (or falls back to) a known-good layout.
//! - [`PersistenceError`]: a carrier write failed; the in-memory layout stays
//!   authoritative for the rest of the session.
//!
//! Every error carries a stable `E_*` code through [`ErrorCode`] so the
//! presentation layer can key notices off something other than display text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Stable machine-readable code for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether repeating the same operation later could succeed.
    fn retryable(&self) -> bool {
        false
    }
}

/// A mutation was rejected because it would break a layout invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("must have at least one panel")]
    LastPanel,
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("panel index {index} out of range (have {len})")]
    PanelOutOfRange { index: usize, len: usize },
    #[error("please enter a URL")]
    EmptyTarget,
    #[error("invalid scale: {0}")]
    InvalidScale(f64),
    #[error("a resize is in progress")]
    ResizeInProgress,
    #[error("grid must have at least one row and column (got {cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },
    #[error("layout has no panels")]
    NoPanels,
    #[error("panel {index} has an empty area")]
    DegenerateArea { index: usize },
    #[error("panel {index} lies outside the grid")]
    AreaOutOfBounds { index: usize },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LastPanel => "E_LAST_PANEL",
            Self::UnknownTemplate(_) => "E_UNKNOWN_TEMPLATE",
            Self::PanelOutOfRange { .. } => "E_PANEL_OUT_OF_RANGE",
            Self::EmptyTarget => "E_EMPTY_TARGET",
            Self::InvalidScale(_) => "E_INVALID_SCALE",
            Self::ResizeInProgress => "E_RESIZE_IN_PROGRESS",
            Self::EmptyGrid { .. } => "E_EMPTY_GRID",
            Self::NoPanels => "E_NO_PANELS",
            Self::DegenerateArea { .. } => "E_DEGENERATE_AREA",
            Self::AreaOutOfBounds { .. } => "E_AREA_OUT_OF_BOUNDS",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ResizeInProgress)
    }
}

/// Encoded layout text could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The share-link payload is not valid base64.
    #[error("invalid transport encoding: {0}")]
    Transport(#[from] base64::DecodeError),
    /// The base64 payload did not decode to UTF-8 text.
    #[error("share payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The text is not well-formed JSON of the expected shape.
    #[error("malformed layout text: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The text parsed but lacks the grid or the panel sequence.
    #[error("layout text is missing its grid or panels")]
    MissingStructure,
    /// The text parsed but describes an invalid layout.
    #[error("invalid layout: {0}")]
    Invalid(#[from] ValidationError),
}

impl ErrorCode for DecodeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_DECODE_TRANSPORT",
            Self::Utf8(_) => "E_DECODE_UTF8",
            Self::Syntax(_) => "E_DECODE_SYNTAX",
            Self::MissingStructure => "E_DECODE_STRUCTURE",
            Self::Invalid(_) => "E_DECODE_INVALID",
        }
    }
}

/// A carrier could not store the encoded layout.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage write failed: {0}")]
    Io(#[from] std::io::Error),
    /// The host refused the write (quota exceeded, storage disabled, ...).
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

impl ErrorCode for PersistenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "E_PERSIST_IO",
            Self::Rejected(_) => "E_PERSIST_REJECTED",
        }
    }

    fn retryable(&self) -> bool {
        true
    }
}

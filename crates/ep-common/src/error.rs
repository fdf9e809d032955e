//! Error types for the pipeline configuration crates.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("unknown environment label: {label:?}")]
    UnknownEnvironment { label: String },

    #[error("unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // Snapshot errors (20-29)
    #[error("snapshot hash mismatch: expected {expected}, got {actual}")]
    SnapshotMismatch { expected: String, actual: String },

    #[error("unsupported schema version: {0}")]
    UnsupportedSchema(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::UnknownEnvironment { .. } => 11,
            Error::UnknownKey { .. } => 12,
            Error::InvalidConfig(_) => 13,
            Error::SnapshotMismatch { .. } => 20,
            Error::UnsupportedSchema(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}

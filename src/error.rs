// src/error.rs

//! Crate-wide error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by recipe parsing and addon composition
#[derive(Error, Debug)]
pub enum Error {
    /// Recipe text violating the input grammar; the message references
    /// the offending line where one exists
    #[error("{0}")]
    Format(String),

    /// An input or template file that does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// No pack in the template declares a `data` module
    #[error("No behavior pack found in {0}")]
    PackNotFound(PathBuf),

    /// Zip-level failure reading or writing an archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// JSON serialization or deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for addonsmith operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is a recognized failure with an actionable message
    ///
    /// Recognized failures exit with status 1; anything else is surfaced
    /// as unexpected and exits with status 2.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Error::Format(_) | Error::NotFound(_) | Error::PackNotFound(_)
        )
    }
}

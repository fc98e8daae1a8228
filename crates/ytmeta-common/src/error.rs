//! Common error types used throughout ytmeta.
//!
//! This module provides a unified error type that covers the failure cases of
//! the sidecar pipeline: missing sidecar files, malformed JSON, unparseable
//! dates, cancelled refreshes, and I/O failures.

/// Common error type for ytmeta.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field value could not be parsed (e.g. a malformed YYYYMMDD date).
    #[error("Parse error: {0}")]
    Parse(String),

    /// The sidecar JSON was malformed or had mismatched field types.
    #[error("Invalid sidecar JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An image file could not be probed for its dimensions.
    #[error("Image probe failed: {0}")]
    Probe(String),

    /// The operation was cancelled before the sidecar was read.
    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new Probe error.
    pub fn probe<S: Into<String>>(msg: S) -> Self {
        Self::Probe(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

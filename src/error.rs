//! Typed errors for the spotlight pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on failure modes. None of these escape the batch runner: the orchestrator
//! normalizes every error into a `ProcessingOutcome` message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from fetching a page over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("HTTP request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server responded with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Request exceeded the configured timeout
    #[error("timeout fetching {url}")]
    Timeout { url: String },
}

/// Errors from the text-generation backend.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Request to the backend failed at the transport level
    #[error("generation request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Backend returned an error payload (e.g. model not found)
    #[error("generation backend error: {message}")]
    Api { message: String },

    /// Response body did not match the expected shape
    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Errors from writing the output artifact.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the temp file failed
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temp file into place failed
    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for generation operations.
pub type GenerateResult<T> = std::result::Result<T, GenerateError>;

/// Result type alias for persistence operations.
pub type PersistResult<T> = std::result::Result<T, PersistError>;

//! Domain-level error types.

use thiserror::Error;

/// A timeline fetch failed.
///
/// The pager treats every variant the same way: the fetching indicator is
/// cleared and the page counter is rolled back. The variants only exist so
/// logs say what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Publishing a new post failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Post body is empty")]
    Empty,

    #[error("Post body is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Snapshot encoding or decoding failed.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

//! Timeline client port - abstraction over the REST API.

use async_trait::async_trait;

use crate::domain::{Cursor, DEFAULT_SINCE, Post};
use crate::error::FetchError;

/// Authenticated access to the home timeline.
#[async_trait]
pub trait TimelineClient: Send + Sync {
    /// Most recent posts newer than `since_id`.
    async fn fetch_since(&self, since_id: u64) -> Result<Vec<Post>, FetchError>;

    /// Posts at or below `max_id`.
    async fn fetch_before(&self, max_id: u64) -> Result<Vec<Post>, FetchError>;

    /// Publish a new post and return it as the server stored it.
    async fn publish(&self, body: &str) -> Result<Post, FetchError>;

    /// Dispatch on the cursor: the sentinel goes to `fetch_since`, anything
    /// else to `fetch_before`.
    async fn fetch(&self, cursor: Cursor) -> Result<Vec<Post>, FetchError> {
        match cursor {
            Cursor::Latest => self.fetch_since(DEFAULT_SINCE).await,
            Cursor::Before(max_id) => self.fetch_before(max_id).await,
        }
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::SnapshotError;

/// Posts currently loaded, newest first, plus the paging bookkeeping that
/// goes with them.
#[derive(Debug, Default)]
pub struct TimelineState {
    posts: Vec<Post>,
    page: u32,
    fetching: bool,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from a snapshot. Only posts survive; page and
    /// fetching flag start fresh.
    pub fn from_snapshot(snapshot: TimelineSnapshot) -> Self {
        Self {
            posts: snapshot.posts,
            ..Self::default()
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Identifier of the oldest loaded post.
    pub fn last_id(&self) -> Option<u64> {
        self.posts.last().map(|p| p.uuid)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Step the page counter back by one.
    ///
    /// Returns the new page, or `None` when already at page zero.
    pub fn rollback_page(&mut self) -> Option<u32> {
        if self.page == 0 {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn set_fetching(&mut self, fetching: bool) {
        self.fetching = fetching;
    }

    /// Drop everything held and take `page` verbatim.
    pub fn replace(&mut self, page: Vec<Post>) -> usize {
        self.posts = page;
        self.posts.len()
    }

    /// Append `page` after the posts already held, preserving order.
    ///
    /// Posts whose identifier is already present are skipped. Returns the
    /// number of posts actually appended.
    pub fn append(&mut self, page: Vec<Post>) -> usize {
        let mut seen: HashSet<u64> = self.posts.iter().map(|p| p.uuid).collect();
        let before = self.posts.len();

        for post in page {
            if seen.insert(post.uuid) {
                self.posts.push(post);
            } else {
                tracing::debug!(uuid = post.uuid, "Skipping duplicate post");
            }
        }

        self.posts.len() - before
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            posts: self.posts.clone(),
        }
    }
}

/// Transient copy of the loaded posts, kept across a view teardown and
/// restored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub posts: Vec<Post>,
}

impl TimelineSnapshot {
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        serde_json::to_vec(self).map_err(SnapshotError::Encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        serde_json::from_slice(bytes).map_err(SnapshotError::Decode)
    }
}

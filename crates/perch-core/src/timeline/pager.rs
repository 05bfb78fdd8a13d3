use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ScrollTracker;
use crate::domain::{Cursor, Post, TimelineSnapshot, TimelineState};
use crate::error::{ComposeError, FetchError};
use crate::ports::{TimelineClient, TimelineDisplay};

/// Longest post body accepted by `compose`, in characters.
pub const MAX_POST_LEN: usize = 280;

/// What a completed fetch did to the loaded posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// First page replaced everything held.
    Replaced(usize),
    /// Older page appended after the posts held.
    Appended(usize),
    /// No request was issued.
    Skipped,
}

/// Home timeline pager.
///
/// Decides which page to request, folds the result into the loaded posts and
/// rolls the page counter back when a request fails. Every fetch borrows the
/// pager mutably until it completes, so a pager never has two requests in
/// flight.
pub struct TimelinePager<D: TimelineDisplay> {
    client: Arc<dyn TimelineClient>,
    display: D,
    state: TimelineState,
    scroll: ScrollTracker,
}

impl<D: TimelineDisplay> TimelinePager<D> {
    pub fn new(client: Arc<dyn TimelineClient>, display: D) -> Self {
        Self {
            client,
            display,
            state: TimelineState::new(),
            scroll: ScrollTracker::default(),
        }
    }

    /// Build a pager around posts kept from an earlier view.
    pub fn with_snapshot(
        client: Arc<dyn TimelineClient>,
        display: D,
        snapshot: TimelineSnapshot,
    ) -> Self {
        let mut pager = Self::new(client, display);
        pager.restore(snapshot);
        pager
    }

    pub fn with_scroll_tracker(mut self, scroll: ScrollTracker) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    pub fn page(&self) -> u32 {
        self.state.page()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching()
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        self.state.snapshot()
    }

    /// Replace the loaded posts with a snapshot's, resetting paging.
    pub fn restore(&mut self, snapshot: TimelineSnapshot) {
        debug!(posts = snapshot.posts.len(), "Restoring timeline snapshot");
        self.state = TimelineState::from_snapshot(snapshot);
        self.scroll.reset();
    }

    /// Render what is held, or fetch the first page if nothing is.
    pub async fn show_timeline(&mut self) -> Result<FetchOutcome, FetchError> {
        if self.state.is_empty() {
            return self.refresh().await;
        }
        self.display.show_list(self.state.posts());
        Ok(FetchOutcome::Skipped)
    }

    /// Fetch the most recent page and replace everything held with it.
    pub async fn refresh(&mut self) -> Result<FetchOutcome, FetchError> {
        self.fetch_page(Cursor::Latest).await
    }

    /// Fetch the page older than the last post held and append it.
    ///
    /// Does nothing with fewer than two posts held.
    pub async fn load_more(&mut self) -> Result<FetchOutcome, FetchError> {
        if self.state.len() < 2 {
            debug!(held = self.state.len(), "Not enough posts to page from");
            return Ok(FetchOutcome::Skipped);
        }

        match self.state.last_id() {
            Some(max_id) => self.fetch_page(Cursor::Before(max_id)).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    /// The scroll notifier reports the user is near the end of the list.
    pub async fn on_scroll_near_end(
        &mut self,
        page: u32,
        total: usize,
    ) -> Result<FetchOutcome, FetchError> {
        debug!(page, total, "Loading next page");
        self.state.set_page(page);
        self.load_more().await
    }

    /// Feed a raw scroll position through the tracker.
    pub async fn on_scrolled(
        &mut self,
        last_visible: usize,
        total: usize,
    ) -> Result<FetchOutcome, FetchError> {
        match self.scroll.on_scrolled(last_visible, total) {
            Some((page, total)) => self.on_scroll_near_end(page, total).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    /// Publish a new post, then refresh so it shows up at the top.
    ///
    /// A failed refresh is reported through the display like any other
    /// fetch failure and does not fail the compose.
    pub async fn compose(&mut self, body: &str) -> Result<Post, ComposeError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ComposeError::Empty);
        }
        let len = body.chars().count();
        if len > MAX_POST_LEN {
            return Err(ComposeError::TooLong {
                len,
                max: MAX_POST_LEN,
            });
        }

        let post = self.client.publish(body).await?;
        info!(uuid = post.uuid, "Post published");

        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Refresh after publish failed");
        }

        Ok(post)
    }

    async fn fetch_page(&mut self, cursor: Cursor) -> Result<FetchOutcome, FetchError> {
        debug!(%cursor, page = self.state.page(), "Fetching timeline page");
        self.state.set_fetching(true);
        self.display.set_fetching(true);

        let result = self.client.fetch(cursor).await;

        self.state.set_fetching(false);
        self.display.set_fetching(false);

        match result {
            Ok(page) => {
                let outcome = if cursor.is_first_page() {
                    FetchOutcome::Replaced(self.state.replace(page))
                } else {
                    FetchOutcome::Appended(self.state.append(page))
                };
                debug!(?outcome, held = self.state.len(), "Timeline page merged");
                self.display.show_list(self.state.posts());
                Ok(outcome)
            }
            Err(e) => {
                let rolled_back = self.state.rollback_page();
                if let Some(page) = rolled_back {
                    self.scroll.rewind(page);
                }
                warn!(error = %e, %cursor, page = self.state.page(), "Timeline fetch failed");
                self.display.report_failure(&e);
                Err(e)
            }
        }
    }
}

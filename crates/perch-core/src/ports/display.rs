//! Display port - whatever renders the timeline.

use crate::domain::Post;
use crate::error::FetchError;

/// Receives the loaded posts and the fetching indicator.
pub trait TimelineDisplay: Send {
    /// Render the full list of loaded posts.
    fn show_list(&mut self, posts: &[Post]);

    /// Toggle the "fetching" indicator.
    fn set_fetching(&mut self, fetching: bool);

    /// A fetch failed. The indicator has already been cleared.
    fn report_failure(&mut self, _error: &FetchError) {}
}

/// How close to the end of the list (in items) a scroll must get before the
/// next page is requested.
pub const DEFAULT_VISIBLE_THRESHOLD: usize = 5;

/// Endless-scroll notifier.
///
/// Fed with the last visible index and the total item count on every scroll,
/// it decides when the user is near the end of the loaded list and bumps the
/// page counter. It stays quiet until the list grows again, so one page is
/// requested per threshold crossing.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    visible_threshold: usize,
    starting_page: u32,
    current_page: u32,
    previous_total: usize,
    loading: bool,
}

impl ScrollTracker {
    pub fn new(visible_threshold: usize) -> Self {
        Self {
            visible_threshold,
            starting_page: 0,
            current_page: 0,
            previous_total: 0,
            loading: true,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record a scroll position.
    ///
    /// Returns `Some((page, total))` when the next page should be loaded.
    pub fn on_scrolled(&mut self, last_visible: usize, total: usize) -> Option<(u32, usize)> {
        // List shrank, e.g. after a refresh with a shorter first page.
        if total < self.previous_total {
            self.current_page = self.starting_page;
            self.previous_total = total;
            self.loading = total == 0;
        }

        if self.loading && total > self.previous_total {
            self.loading = false;
            self.previous_total = total;
        }

        if !self.loading && last_visible.saturating_add(self.visible_threshold) > total {
            self.current_page += 1;
            self.loading = true;
            tracing::trace!(page = self.current_page, total, "Scrolled near end of timeline");
            return Some((self.current_page, total));
        }

        None
    }

    /// Move back to `page` after a failed fetch so the next crossing asks
    /// for the same page again.
    pub fn rewind(&mut self, page: u32) {
        self.current_page = page;
        self.loading = false;
    }

    pub fn reset(&mut self) {
        self.current_page = self.starting_page;
        self.previous_total = 0;
        self.loading = true;
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_first_items() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.on_scrolled(0, 0), None);
        assert!(tracker.is_loading());
    }

    #[test]
    fn test_fires_once_near_end() {
        let mut tracker = ScrollTracker::default();

        // 20 items arrive, user is near the top.
        assert_eq!(tracker.on_scrolled(3, 20), None);
        // Within the threshold of the end.
        assert_eq!(tracker.on_scrolled(16, 20), Some((1, 20)));
        // Still loading: further scrolling does nothing.
        assert_eq!(tracker.on_scrolled(19, 20), None);

        // Next page lands.
        assert_eq!(tracker.on_scrolled(19, 40), None);
        assert_eq!(tracker.on_scrolled(36, 40), Some((2, 40)));
        assert_eq!(tracker.current_page(), 2);
    }

    #[test]
    fn test_resets_when_list_shrinks() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scrolled(0, 40);
        tracker.on_scrolled(38, 40);
        assert_eq!(tracker.current_page(), 1);

        assert_eq!(tracker.on_scrolled(0, 20), None);
        assert_eq!(tracker.current_page(), 0);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_rewind_allows_retry() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scrolled(0, 20);
        assert_eq!(tracker.on_scrolled(18, 20), Some((1, 20)));

        tracker.rewind(0);

        assert_eq!(tracker.on_scrolled(18, 20), Some((1, 20)));
    }

    #[test]
    fn test_out_of_range_positions_do_not_overflow() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scrolled(0, 20);
        assert_eq!(tracker.on_scrolled(usize::MAX, 20), Some((1, 20)));

        let mut wide = ScrollTracker::new(usize::MAX);
        wide.on_scrolled(0, 20);
        assert_eq!(wide.on_scrolled(3, 20), Some((1, 20)));
    }

    #[test]
    fn test_reset() {
        let mut tracker = ScrollTracker::new(2);
        tracker.on_scrolled(0, 10);
        tracker.on_scrolled(9, 10);

        tracker.reset();

        assert_eq!(tracker.current_page(), 0);
        assert!(tracker.is_loading());
    }
}

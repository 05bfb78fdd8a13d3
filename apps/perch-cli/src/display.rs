//! Terminal rendering of the timeline.

use std::io::Write;

use chrono::Utc;

use perch_core::FetchError;
use perch_core::domain::Post;
use perch_core::ports::TimelineDisplay;

/// Prints the timeline to a writer.
///
/// When a new list merely extends the one printed last, only the new tail is
/// printed; otherwise the whole list is printed again under a header.
pub struct TerminalDisplay<W: Write + Send> {
    out: W,
    rendered: Vec<u64>,
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rendered: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn extends_rendered(&self, posts: &[Post]) -> bool {
        !self.rendered.is_empty()
            && posts.len() >= self.rendered.len()
            && posts.iter().zip(&self.rendered).all(|(p, id)| p.uuid == *id)
    }

    fn write_list(&mut self, posts: &[Post]) -> std::io::Result<()> {
        let start = if self.extends_rendered(posts) {
            self.rendered.len()
        } else {
            writeln!(self.out, "── home ({} posts) ──", posts.len())?;
            0
        };

        let now = Utc::now();
        for (index, post) in posts.iter().enumerate().skip(start) {
            writeln!(
                self.out,
                "[{index:>3}] @{} · {}",
                post.author.screen_name,
                post.relative_age(now)
            )?;
            writeln!(self.out, "      {}", post.body)?;
        }
        self.out.flush()
    }

    /// Print a line outside the list, e.g. a command result.
    pub fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write + Send> TimelineDisplay for TerminalDisplay<W> {
    fn show_list(&mut self, posts: &[Post]) {
        if let Err(e) = self.write_list(posts) {
            tracing::warn!(error = %e, "Failed to render timeline");
        }
        self.rendered = posts.iter().map(|p| p.uuid).collect();
    }

    fn set_fetching(&mut self, fetching: bool) {
        if fetching {
            self.notice("fetching…");
        }
    }

    fn report_failure(&mut self, error: &FetchError) {
        self.notice(&format!("! could not load timeline: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::domain::Author;

    fn post(uuid: u64, handle: &str) -> Post {
        Post::new(
            uuid,
            Author {
                id: uuid,
                name: handle.to_string(),
                screen_name: handle.to_string(),
                profile_image_url: String::new(),
            },
            format!("hello from {handle}"),
            "not a date".to_string(),
        )
    }

    fn output(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_full_list_with_header() {
        let mut display = TerminalDisplay::new(Vec::new());

        display.show_list(&[post(2, "ada"), post(1, "grace")]);

        let out = output(display);
        assert!(out.starts_with("── home (2 posts) ──\n"));
        assert!(out.contains("[  0] @ada"));
        assert!(out.contains("      hello from grace"));
    }

    #[test]
    fn test_appended_posts_print_only_tail() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.show_list(&[post(3, "ada"), post(2, "grace")]);

        display.show_list(&[post(3, "ada"), post(2, "grace"), post(1, "alan")]);

        let out = output(display);
        assert_eq!(out.matches("── home").count(), 1);
        assert_eq!(out.matches("@ada").count(), 1);
        assert!(out.contains("[  2] @alan"));
    }

    #[test]
    fn test_replaced_list_prints_header_again() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.show_list(&[post(3, "ada")]);

        display.show_list(&[post(9, "alan"), post(3, "ada")]);

        assert_eq!(output(display).matches("── home").count(), 2);
    }

    #[test]
    fn test_failure_notice() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_fetching(true);
        display.set_fetching(false);
        display.report_failure(&FetchError::Transport("timed out".to_string()));

        let out = output(display);
        assert_eq!(
            out,
            "fetching…\n! could not load timeline: Transport failed: timed out\n"
        );
    }
}

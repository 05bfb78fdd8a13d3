/// Wire value sent as `since_id` when asking for the most recent page.
///
/// No real post carries this identifier.
pub const DEFAULT_SINCE: u64 = 1;

/// Pagination boundary for a timeline fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Most recent items (first page).
    Latest,
    /// Items at or below the given post identifier.
    Before(u64),
}

impl Cursor {
    pub fn is_first_page(&self) -> bool {
        matches!(self, Cursor::Latest)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cursor::Latest => write!(f, "since:{DEFAULT_SINCE}"),
            Cursor::Before(id) => write!(f, "max:{id}"),
        }
    }
}

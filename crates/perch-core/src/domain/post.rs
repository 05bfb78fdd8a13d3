use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the timeline API, e.g. `Tue Apr 01 21:16:23 +0000 2014`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Author of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub screen_name: String,
    pub profile_image_url: String,
}

/// A single timeline entry.
///
/// `uuid` is the server-assigned identifier and doubles as the pagination
/// cursor for older pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub uuid: u64,
    pub body: String,
    pub created_at: String,
    pub author: Author,
}

impl Post {
    pub fn new(uuid: u64, author: Author, body: String, created_at: String) -> Self {
        Self {
            uuid,
            body,
            created_at,
            author,
        }
    }

    /// Parse `created_at` into a UTC timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
    }

    /// Age of the post relative to `now`, abbreviated ("42s", "5m", "3h", "2d").
    ///
    /// Returns an empty string when the timestamp cannot be parsed.
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        match self.created_at_utc() {
            Some(created) => relative_age(created, now),
            None => {
                tracing::warn!(uuid = self.uuid, created_at = %self.created_at, "Unparseable post timestamp");
                String::new()
            }
        }
    }
}

/// Abbreviated distance between `then` and `now`.
///
/// Posts older than a week show their calendar date instead.
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    match secs {
        s if s < 60 => format!("{s}s"),
        s if s < 60 * 60 => format!("{}m", s / 60),
        s if s < 24 * 60 * 60 => format!("{}h", s / 3600),
        s if s < 7 * 24 * 60 * 60 => format!("{}d", s / 86_400),
        _ => then.format("%b %d, %Y").to_string(),
    }
}

//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API root for the REST client.
    pub api_base: String,
    /// Bearer token. Without one the app runs against an in-memory timeline.
    pub bearer_token: Option<String>,
    pub page_size: u32,
    pub timeout: Duration,
    /// Items from the end of the list at which the next page is requested.
    pub visible_threshold: usize,
    /// Size of the generated timeline used in offline mode.
    pub offline_posts: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.twitter.com/1.1".to_string(),
            bearer_token: None,
            page_size: 25,
            timeout: Duration::from_secs(15),
            visible_threshold: 5,
            offline_posts: 120,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_base: lookup("PERCH_API_BASE").unwrap_or(defaults.api_base),
            bearer_token: lookup("PERCH_BEARER_TOKEN")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            page_size: lookup("PERCH_PAGE_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.page_size),
            timeout: lookup("PERCH_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            visible_threshold: lookup("PERCH_VISIBLE_THRESHOLD")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.visible_threshold),
            offline_posts: lookup("PERCH_OFFLINE_POSTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.offline_posts),
        }
    }
}

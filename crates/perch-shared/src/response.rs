//! Error envelope returned by the timeline API on non-2xx responses.

use serde::{Deserialize, Serialize};

/// One entry of the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

/// Error body, in either of the two shapes the API uses:
/// `{"errors":[{"code":..,"message":..}]}` or `{"error":".."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    /// Parse an error body. Anything that isn't a known envelope yields `None`.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|r| !r.errors.is_empty() || r.error.is_some())
    }

    /// The most useful human-readable message in the envelope.
    pub fn message(&self) -> Option<String> {
        self.errors
            .first()
            .map(|e| format!("{} (code {})", e.message, e.code))
            .or_else(|| self.error.clone())
    }

    /// Best-effort message for a failed response body: the envelope's
    /// message if there is one, otherwise the raw body trimmed to a sane
    /// length.
    pub fn describe(body: &str) -> String {
        if let Some(message) = Self::parse(body).and_then(|r| r.message()) {
            return message;
        }
        let trimmed = body.trim();
        match trimmed.char_indices().nth(200) {
            Some((idx, _)) => format!("{}…", &trimmed[..idx]),
            None => trimmed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_array() {
        let body = r#"{"errors":[{"code":88,"message":"Rate limit exceeded"}]}"#;
        assert_eq!(
            ApiErrorResponse::describe(body),
            "Rate limit exceeded (code 88)"
        );
    }

    #[test]
    fn test_single_error_string() {
        let body = r#"{"error":"Not authorized."}"#;
        assert_eq!(ApiErrorResponse::describe(body), "Not authorized.");
    }

    #[test]
    fn test_unknown_body_falls_back_to_text() {
        assert!(ApiErrorResponse::parse("{}").is_none());
        assert_eq!(ApiErrorResponse::describe("  <html>oops</html> "), "<html>oops</html>");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(500);
        let described = ApiErrorResponse::describe(&body);
        assert_eq!(described.chars().count(), 201);
        assert!(described.ends_with('…'));
    }
}

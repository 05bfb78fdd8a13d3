//! REST timeline client over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use uuid::Uuid;

use perch_core::FetchError;
use perch_core::domain::Post;
use perch_core::ports::TimelineClient;
use perch_shared::{ApiErrorResponse, UpdateStatusRequest, decode_timeline, decode_tweet};

/// Header carrying the per-request correlation id.
pub static REQUEST_ID_HEADER: &str = "X-Request-ID";

/// REST client configuration.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// API root, e.g. `https://api.twitter.com/1.1`.
    pub base_url: String,
    pub bearer_token: String,
    /// Posts requested per page.
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com/1.1".to_string(),
            bearer_token: String::new(),
            page_size: 25,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Home timeline client talking to the REST API.
///
/// One instance is built at startup and shared; reqwest pools connections
/// underneath.
pub struct RestTimelineClient {
    http: Client,
    config: RestConfig,
}

impl RestTimelineClient {
    pub fn new(config: RestConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("perch/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn timeline_query(&self, bound: &'static str, id: u64) -> Vec<(&'static str, String)> {
        vec![
            ("count", self.config.page_size.to_string()),
            (bound, id.to_string()),
        ]
    }

    async fn get_timeline(&self, bound: &'static str, id: u64) -> Result<Vec<Post>, FetchError> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint("statuses/home_timeline.json");

        tracing::debug!(%request_id, bound, id, "GET home timeline");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.bearer_token)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .query(&self.timeline_query(bound, id))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        check_status(status, &body)?;

        let posts = decode_timeline(&body)?;
        tracing::debug!(%request_id, count = posts.len(), "Home timeline page received");
        Ok(posts)
    }
}

#[async_trait]
impl TimelineClient for RestTimelineClient {
    async fn fetch_since(&self, since_id: u64) -> Result<Vec<Post>, FetchError> {
        self.get_timeline("since_id", since_id).await
    }

    async fn fetch_before(&self, max_id: u64) -> Result<Vec<Post>, FetchError> {
        self.get_timeline("max_id", max_id).await
    }

    async fn publish(&self, body: &str) -> Result<Post, FetchError> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint("statuses/update.json");

        tracing::debug!(%request_id, len = body.len(), "POST status update");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.bearer_token)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .form(&UpdateStatusRequest { status: body })
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        check_status(status, &text)?;

        decode_tweet(&text)
    }
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

fn check_status(status: StatusCode, body: &str) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: status.as_u16(),
        message: ApiErrorResponse::describe(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::domain::DEFAULT_SINCE;

    fn client(base_url: &str) -> RestTimelineClient {
        RestTimelineClient::new(RestConfig {
            base_url: base_url.to_string(),
            bearer_token: "token".to_string(),
            page_size: 20,
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client("https://api.example.com/1.1/");
        assert_eq!(
            client.endpoint("statuses/home_timeline.json"),
            "https://api.example.com/1.1/statuses/home_timeline.json"
        );
    }

    #[test]
    fn test_first_page_query_uses_sentinel() {
        let client = client("https://api.example.com");
        assert_eq!(
            client.timeline_query("since_id", DEFAULT_SINCE),
            vec![("count", "20".to_string()), ("since_id", "1".to_string())]
        );
    }

    #[test]
    fn test_older_page_query_uses_max_id() {
        let client = client("https://api.example.com");
        assert_eq!(
            client.timeline_query("max_id", 848930551989915648),
            vec![
                ("count", "20".to_string()),
                ("max_id", "848930551989915648".to_string())
            ]
        );
    }

    #[test]
    fn test_check_status_maps_error_envelope() {
        let body = r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#;

        let err = check_status(StatusCode::UNAUTHORIZED, body).unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                status: 401,
                message: "Invalid or expired token. (code 89)".to_string()
            }
        );
    }

    #[test]
    fn test_check_status_passes_success() {
        assert!(check_status(StatusCode::OK, "[]").is_ok());
    }
}

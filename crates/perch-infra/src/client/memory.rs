//! In-memory timeline client.
//!
//! Serves pages from a post list held in memory, with the same paging
//! rules as the REST API (`max_id` is inclusive). Used when no API token is
//! configured and as a fake in tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::{Mutex, RwLock};

use perch_core::FetchError;
use perch_core::domain::{Author, CREATED_AT_FORMAT, Post};
use perch_core::ports::TimelineClient;

/// In-memory timeline, newest post first.
pub struct InMemoryTimelineClient {
    posts: RwLock<Vec<Post>>,
    page_size: usize,
    me: Author,
    failures: Mutex<VecDeque<FetchError>>,
}

impl InMemoryTimelineClient {
    pub fn new(page_size: usize) -> Self {
        Self::with_posts(Vec::new(), page_size)
    }

    /// Serve `posts`. They are sorted newest first regardless of input order.
    pub fn with_posts(mut posts: Vec<Post>, page_size: usize) -> Self {
        posts.sort_by(|a, b| b.uuid.cmp(&a.uuid));
        Self {
            posts: RwLock::new(posts),
            page_size: page_size.max(1),
            me: Author {
                id: 1,
                name: "You".to_string(),
                screen_name: "you".to_string(),
                profile_image_url: String::new(),
            },
            failures: Mutex::new(VecDeque::new()),
        }
    }

    /// A timeline of `count` generated posts, one every few minutes.
    pub fn seeded(count: usize, page_size: usize) -> Self {
        let now = Utc::now();
        let authors = [("Ada Lovelace", "ada"), ("Grace Hopper", "grace"), ("Alan Turing", "alan")];

        let posts = (0..count)
            .map(|i| {
                let (name, handle) = authors[i % authors.len()];
                let created = now - Duration::minutes(7 * i as i64);
                Post::new(
                    1_000 + (count - i) as u64,
                    Author {
                        id: 10 + (i % authors.len()) as u64,
                        name: name.to_string(),
                        screen_name: handle.to_string(),
                        profile_image_url: format!("https://avatars.example/{handle}.png"),
                    },
                    format!("Post number {} from @{handle}", count - i),
                    created.format(CREATED_AT_FORMAT).to_string(),
                )
            })
            .collect();

        Self::with_posts(posts, page_size)
    }

    /// Make the next request fail with `error`. Queued failures are used up
    /// in order, one per request.
    pub async fn fail_next(&self, error: FetchError) {
        self.failures.lock().await.push_back(error);
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    async fn injected_failure(&self) -> Result<(), FetchError> {
        match self.failures.lock().await.pop_front() {
            Some(error) => {
                tracing::debug!(%error, "Injected timeline failure");
                Err(error)
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TimelineClient for InMemoryTimelineClient {
    async fn fetch_since(&self, since_id: u64) -> Result<Vec<Post>, FetchError> {
        self.injected_failure().await?;

        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.uuid > since_id)
            .take(self.page_size)
            .cloned()
            .collect())
    }

    async fn fetch_before(&self, max_id: u64) -> Result<Vec<Post>, FetchError> {
        self.injected_failure().await?;

        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.uuid <= max_id)
            .take(self.page_size)
            .cloned()
            .collect())
    }

    async fn publish(&self, body: &str) -> Result<Post, FetchError> {
        self.injected_failure().await?;

        let mut posts = self.posts.write().await;
        let uuid = posts.first().map(|p| p.uuid + 1).unwrap_or(2);
        let post = Post::new(
            uuid,
            self.me.clone(),
            body.to_string(),
            Utc::now().format(CREATED_AT_FORMAT).to_string(),
        );
        posts.insert(0, post.clone());

        tracing::debug!(uuid, "Stored published post");
        Ok(post)
    }
}

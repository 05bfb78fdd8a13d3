//! Application state - the collaborators built once at startup.

use std::sync::Arc;

use perch_core::ports::{SnapshotStore, TimelineClient};
use perch_infra::{InMemorySnapshotStore, InMemoryTimelineClient};

#[cfg(feature = "rest")]
use perch_infra::{RestConfig, RestTimelineClient};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn TimelineClient>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub online: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let snapshots: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());

        #[cfg(feature = "rest")]
        let (client, online): (Arc<dyn TimelineClient>, bool) = match &config.bearer_token {
            Some(token) => {
                let client = RestTimelineClient::new(RestConfig {
                    base_url: config.api_base.clone(),
                    bearer_token: token.clone(),
                    page_size: config.page_size,
                    timeout: config.timeout,
                })?;
                tracing::info!(api_base = %config.api_base, "Using REST timeline");
                (Arc::new(client), true)
            }
            None => {
                tracing::warn!("PERCH_BEARER_TOKEN not set. Running against an offline timeline.");
                (offline_client(config), false)
            }
        };

        #[cfg(not(feature = "rest"))]
        let (client, online): (Arc<dyn TimelineClient>, bool) = {
            tracing::info!("Running without rest feature - using offline timeline");
            (offline_client(config), false)
        };

        Ok(Self {
            client,
            snapshots,
            online,
        })
    }
}

fn offline_client(config: &AppConfig) -> Arc<dyn TimelineClient> {
    Arc::new(InMemoryTimelineClient::seeded(
        config.offline_posts,
        config.page_size as usize,
    ))
}

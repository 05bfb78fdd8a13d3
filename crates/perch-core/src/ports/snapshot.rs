use async_trait::async_trait;

use crate::domain::TimelineSnapshot;
use crate::error::SnapshotError;

/// Snapshot store - keeps a timeline across a view teardown.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Store the snapshot under `key`, replacing any previous one.
    async fn save(&self, key: &str, snapshot: &TimelineSnapshot) -> Result<(), SnapshotError>;

    /// Load the snapshot stored under `key`.
    async fn load(&self, key: &str) -> Result<Option<TimelineSnapshot>, SnapshotError>;

    /// Forget the snapshot stored under `key`.
    async fn clear(&self, key: &str) -> Result<(), SnapshotError>;
}

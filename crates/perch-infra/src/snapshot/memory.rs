//! In-memory snapshot store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use perch_core::SnapshotError;
use perch_core::domain::TimelineSnapshot;
use perch_core::ports::SnapshotStore;

/// Snapshot store backed by a HashMap of encoded snapshots.
///
/// Snapshots are stored encoded, the way they would cross a process or view
/// boundary. Note: data is lost on process restart.
pub struct InMemorySnapshotStore {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, key: &str, snapshot: &TimelineSnapshot) -> Result<(), SnapshotError> {
        let bytes = snapshot.encode()?;
        tracing::debug!(key, bytes = bytes.len(), posts = snapshot.posts.len(), "Snapshot saved");

        let mut store = self.store.write().await;
        store.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<TimelineSnapshot>, SnapshotError> {
        let store = self.store.read().await;
        store
            .get(key)
            .map(|bytes| TimelineSnapshot::decode(bytes))
            .transpose()
    }

    async fn clear(&self, key: &str) -> Result<(), SnapshotError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::domain::{Author, Post};

    fn snapshot() -> TimelineSnapshot {
        let author = Author {
            id: 3,
            name: "Linus".to_string(),
            screen_name: "linus".to_string(),
            profile_image_url: "https://img.example/l.png".to_string(),
        };
        TimelineSnapshot {
            posts: vec![
                Post::new(20, author.clone(), "b".to_string(), "Tue Apr 01 21:16:23 +0000 2014".to_string()),
                Post::new(10, author, "a".to_string(), "Tue Apr 01 21:10:00 +0000 2014".to_string()),
            ],
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemorySnapshotStore::new();
        store.save("home", &snapshot()).await.unwrap();
        assert_eq!(store.load("home").await.unwrap(), Some(snapshot()));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let store = InMemorySnapshotStore::new();
        assert_eq!(store.load("home").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemorySnapshotStore::new();
        store.save("home", &snapshot()).await.unwrap();
        store.clear("home").await.unwrap();
        assert_eq!(store.load("home").await.unwrap(), None);
    }
}

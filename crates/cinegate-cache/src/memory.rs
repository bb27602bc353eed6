//! Process-local token version store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;

/// Token versions held in a sharded map.
///
/// Each read-modify-write runs while holding the shard lock for the key,
/// which makes operations on one user linearizable.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenVersionStore {
    versions: Arc<DashMap<Uuid, i64>>,
}

impl MemoryTokenVersionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenVersionStore for MemoryTokenVersionStore {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<i64>> {
        Ok(self.versions.get(&user_id).map(|v| *v))
    }

    async fn increment(&self, user_id: Uuid) -> AppResult<i64> {
        let mut version = self.versions.entry(user_id).or_insert(0);
        *version += 1;
        Ok(*version)
    }

    async fn init_if_absent(&self, user_id: Uuid) -> AppResult<bool> {
        match self.versions.entry(user_id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(0);
                Ok(true)
            }
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_user_has_no_version() {
        let store = MemoryTokenVersionStore::new();
        assert_eq!(store.get(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_init_does_not_reset() {
        let store = MemoryTokenVersionStore::new();
        let id = Uuid::new_v4();

        assert!(store.init_if_absent(id).await.unwrap());
        assert_eq!(store.get(id).await.unwrap(), Some(0));
        assert_eq!(store.increment(id).await.unwrap(), 1);
        assert!(!store.init_if_absent(id).await.unwrap());
        assert_eq!(store.get(id).await.unwrap(), Some(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = MemoryTokenVersionStore::new();
        let id = Uuid::new_v4();

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment(id).await.unwrap() })
            })
            .collect();

        let mut seen: Vec<i64> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, (1..=200).collect::<Vec<i64>>());
        assert_eq!(store.get(id).await.unwrap(), Some(200));
    }
}

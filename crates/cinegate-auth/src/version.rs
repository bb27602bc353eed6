//! Per-user token version registry.
//!
//! A token is valid only while the version embedded in it equals the
//! registry's current value for its subject. Bumping the value revokes
//! every token issued before the bump.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;

/// Registry over a pluggable [`TokenVersionStore`].
#[derive(Debug, Clone)]
pub struct TokenVersionRegistry {
    store: Arc<dyn TokenVersionStore>,
}

impl TokenVersionRegistry {
    /// Wraps a store backend.
    pub fn new(store: Arc<dyn TokenVersionStore>) -> Self {
        Self { store }
    }

    /// Current version, `0` for a user never observed.
    pub async fn current_version(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self.store.get(user_id).await?.unwrap_or(0))
    }

    /// Increments the version by exactly one and returns the new value.
    pub async fn bump(&self, user_id: Uuid) -> AppResult<i64> {
        let version = self.store.increment(user_id).await?;
        debug!(user_id = %user_id, version, "Token version bumped");
        Ok(version)
    }

    /// Whether a presented version matches the current one.
    pub async fn is_valid(&self, user_id: Uuid, presented: i64) -> AppResult<bool> {
        Ok(self.current_version(user_id).await? == presented)
    }

    /// Records version `0` for a user not yet tracked. Never resets.
    pub async fn ensure_initialized(&self, user_id: Uuid) -> AppResult<()> {
        if self.store.init_if_absent(user_id).await? {
            debug!(user_id = %user_id, "Token version initialized");
        }
        Ok(())
    }

    /// Backend reachability.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}

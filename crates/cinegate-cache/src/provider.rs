//! Token store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use cinegate_core::config::TokenStoreConfig;
use cinegate_core::error::AppError;
use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;
use cinegate_database::DatabasePool;
use cinegate_database::repositories::PgTokenVersionStore;

use crate::memory::MemoryTokenVersionStore;

/// Wraps the token version backend chosen by `token_store.provider`.
#[derive(Debug, Clone)]
pub struct TokenStoreManager {
    inner: Arc<dyn TokenVersionStore>,
}

impl TokenStoreManager {
    /// Build the configured backend.
    ///
    /// The `database` backend requires a connected pool.
    pub async fn new(config: &TokenStoreConfig, database: Option<&DatabasePool>) -> AppResult<Self> {
        let inner: Arc<dyn TokenVersionStore> = match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory token version store");
                Arc::new(MemoryTokenVersionStore::new())
            }
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis token version store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisTokenVersionStore::new(client))
            }
            "database" => {
                let pool = database.ok_or_else(|| {
                    AppError::configuration(
                        "token_store.provider = \"database\" requires database.provider = \"postgres\"",
                    )
                })?;
                info!("Initializing PostgreSQL token version store");
                Arc::new(PgTokenVersionStore::new(pool.pool().clone()))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown token store provider: '{other}'. Supported: memory, redis, database"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl TokenVersionStore for TokenStoreManager {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<i64>> {
        self.inner.get(user_id).await
    }

    async fn increment(&self, user_id: Uuid) -> AppResult<i64> {
        self.inner.increment(user_id).await
    }

    async fn init_if_absent(&self, user_id: Uuid) -> AppResult<bool> {
        self.inner.init_if_absent(user_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

//! Token versions as Redis integers.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;
use uuid::Uuid;

use cinegate_core::error::AppError;
use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;

use super::client::{RedisClient, cache_error};

/// Token version store shared by every instance pointing at the same Redis.
///
/// `INCR` is atomic on the server and treats a missing key as 0.
#[derive(Debug, Clone)]
pub struct RedisTokenVersionStore {
    client: RedisClient,
}

impl RedisTokenVersionStore {
    /// Create a store over a connected client.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, user_id: Uuid) -> String {
        self.client.version_key(user_id)
    }

    fn map_err(e: redis::RedisError) -> AppError {
        cache_error(format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl TokenVersionStore for RedisTokenVersionStore {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<i64>> {
        let mut conn = self.client.connection();
        let version: Option<i64> = conn.get(self.key(user_id)).await.map_err(Self::map_err)?;
        Ok(version)
    }

    async fn increment(&self, user_id: Uuid) -> AppResult<i64> {
        let mut conn = self.client.connection();
        let version: i64 = conn
            .incr(self.key(user_id), 1i64)
            .await
            .map_err(Self::map_err)?;
        debug!(%user_id, version, "Token version bumped");
        Ok(version)
    }

    async fn init_if_absent(&self, user_id: Uuid) -> AppResult<bool> {
        let mut conn = self.client.connection();
        let set: bool = conn
            .set_nx(self.key(user_id), 0i64)
            .await
            .map_err(Self::map_err)?;
        Ok(set)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.connection();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}

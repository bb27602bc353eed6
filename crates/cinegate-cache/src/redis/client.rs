//! Connection to the Redis instance holding token versions.

use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;
use uuid::Uuid;

use cinegate_core::config::{RedisConfig, redact_url};
use cinegate_core::error::{AppError, ErrorKind};
use cinegate_core::result::AppResult;

use crate::keys;

/// Reconnecting Redis handle scoped to one key namespace.
#[derive(Debug, Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisClient {
    /// Open the connection manager for `config.url`.
    pub async fn connect(config: &RedisConfig) -> AppResult<Self> {
        let target = redact_url(&config.url);
        let client = Client::open(config.url.as_str())
            .map_err(|e| cache_error(format!("Invalid Redis URL {target}"), e))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| cache_error(format!("Cannot reach Redis at {target}"), e))?;

        info!(url = %target, prefix = %config.key_prefix, "Token version store connected to Redis");
        Ok(Self {
            conn,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// A cheap clone of the multiplexed connection.
    pub fn connection(&self) -> ConnectionManager {
        self.conn.clone()
    }

    /// Namespaced key holding the version counter of `user_id`.
    pub fn version_key(&self, user_id: Uuid) -> String {
        namespaced(&self.key_prefix, &keys::token_version(user_id))
    }
}

/// Wrap a Redis failure as a cache error.
pub(crate) fn cache_error(context: impl Into<String>, e: redis::RedisError) -> AppError {
    AppError::with_source(ErrorKind::Cache, context, e)
}

fn namespaced(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_keys() {
        let id = Uuid::nil();
        assert_eq!(
            namespaced("cinegate:", &keys::token_version(id)),
            format!("cinegate:{}", keys::token_version(id))
        );
        assert_eq!(namespaced("", "k"), "k");
    }
}

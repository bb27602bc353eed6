//! Token versions kept in the `users.token_version` column.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use cinegate_core::error::{AppError, ErrorKind};
use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;

/// Token version store backed by the users table.
///
/// Every row starts at 0 through the column default, so initialization is
/// implicit and increments are serialized by the row lock taken by `UPDATE`.
#[derive(Debug, Clone)]
pub struct PgTokenVersionStore {
    pool: PgPool,
}

impl PgTokenVersionStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenVersionStore for PgTokenVersionStore {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT token_version FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read token version", e)
            })
    }

    async fn increment(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE users SET token_version = token_version + 1, updated_at = NOW() \
             WHERE id = $1 RETURNING token_version",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to bump token version", e))?
        .ok_or_else(|| AppError::not_found(format!("User '{user_id}' not found")))
    }

    async fn init_if_absent(&self, _user_id: Uuid) -> AppResult<bool> {
        Ok(false)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

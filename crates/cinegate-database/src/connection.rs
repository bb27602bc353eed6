//! Pooled PostgreSQL access for the credential store and version column.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use cinegate_core::config::{DatabaseConfig, redact_url};
use cinegate_core::error::{AppError, ErrorKind};

/// Shared handle to the users database.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open the pool and verify the server answers before returning.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let target = redact_url(&config.url);
        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Cannot reach user database at {target}"),
                    e,
                )
            })?;

        info!(
            url = %target,
            max_connections = config.max_connections,
            "User database ready"
        );
        Ok(Self { pool })
    }

    /// The sqlx pool used by repositories and migrations.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .test_before_acquire(true)
}

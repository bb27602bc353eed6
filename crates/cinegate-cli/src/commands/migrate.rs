//! Database migration command.

use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;
use cinegate_database::DatabasePool;
use cinegate_database::migration::run_migrations;

use crate::output;

/// Apply all pending migrations.
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    if !config.database.is_postgres() {
        return Err(AppError::configuration(
            "Migrations require database.provider = \"postgres\"",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    output::done("All migrations applied successfully.");
    Ok(())
}

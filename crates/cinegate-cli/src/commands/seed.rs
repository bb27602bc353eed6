//! Demo account seeding command.

use cinegate_auth::seed::{DEMO_ACCOUNTS, seed_demo_users};
use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;

use crate::output;

/// Upsert the demo accounts into the configured credential store.
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    let state = super::connect(config).await?;
    let seeded = seed_demo_users(state.auth.users(), state.auth.hasher()).await?;

    if seeded < DEMO_ACCOUNTS.len() {
        output::caution(&format!(
            "{seeded} of {} demo users seeded; see logs for failures",
            DEMO_ACCOUNTS.len()
        ));
    } else {
        output::done(&format!("{seeded} demo users ready"));
    }
    for account in DEMO_ACCOUNTS {
        output::field(account.email, account.role.as_str());
    }
    Ok(())
}

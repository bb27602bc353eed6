//! Demo account bootstrap.

use std::sync::Arc;

use tracing::{info, warn};

use cinegate_core::result::AppResult;
use cinegate_database::repositories::UserStore;
use cinegate_entity::user::{CreateUser, Role};

use crate::password::PasswordHasher;

/// A fixed account created by [`seed_demo_users`].
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Accounts for local development and manual testing.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "admin@example.com",
        password: "admin123",
        role: Role::Admin,
    },
    DemoAccount {
        email: "staff@example.com",
        password: "staff123",
        role: Role::Staff,
    },
    DemoAccount {
        email: "user@example.com",
        password: "user123",
        role: Role::Public,
    },
];

/// Upserts the demo accounts by email, leaving existing rows untouched.
///
/// A failure for one account is logged and skipped. Returns how many
/// accounts are present afterwards.
pub async fn seed_demo_users(
    users: &Arc<dyn UserStore>,
    hasher: &PasswordHasher,
) -> AppResult<usize> {
    let mut seeded = 0;

    for account in DEMO_ACCOUNTS {
        let password_hash = match hasher.hash_password_async(account.password.to_string()).await {
            Ok(hash) => hash,
            Err(e) => {
                warn!(email = account.email, error = %e, "Failed to hash demo password");
                continue;
            }
        };

        let data = CreateUser {
            email: account.email.to_string(),
            password_hash,
            roles: vec![account.role],
        };
        match users.upsert_by_email(&data).await {
            Ok(user) => {
                info!(user_id = %user.id, email = account.email, "Demo user ready");
                seeded += 1;
            }
            Err(e) => warn!(email = account.email, error = %e, "Failed to seed demo user"),
        }
    }

    Ok(seeded)
}

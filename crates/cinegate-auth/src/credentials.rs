//! Email/password validation against the credential store.

use std::sync::Arc;

use tracing::debug;

use cinegate_core::result::AppResult;
use cinegate_database::repositories::UserStore;
use cinegate_entity::user::User;

use crate::password::PasswordHasher;
use crate::version::TokenVersionRegistry;

/// Checks a login attempt. Unknown email and wrong password look the same.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    registry: TokenVersionRegistry,
}

impl CredentialValidator {
    /// Creates a new validator.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        registry: TokenVersionRegistry,
    ) -> Self {
        Self {
            users,
            hasher,
            registry,
        }
    }

    /// Returns the user when the password matches, `None` otherwise.
    ///
    /// A successful check starts tracking the user's token version at `0`
    /// if it is not tracked yet.
    pub async fn validate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            debug!("Login attempt for unknown email");
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify_password_async(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            debug!(user_id = %user.id, "Password mismatch");
            return Ok(None);
        }

        self.registry.ensure_initialized(user.id).await?;
        Ok(Some(user))
    }
}

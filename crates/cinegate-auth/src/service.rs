//! Login, refresh, logout, and user creation flows.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cinegate_core::config::AuthConfig;
use cinegate_core::error::AppError;
use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;
use cinegate_database::repositories::UserStore;
use cinegate_entity::user::{CreateUser, Role, User};

use crate::credentials::CredentialValidator;
use crate::issuer::TokenIssuer;
use crate::jwt::{JwtDecoder, JwtEncoder, JwtPayload, TokenPair};
use crate::password::PasswordHasher;
use crate::verifier::TokenVerifier;
use crate::version::TokenVersionRegistry;

/// Message for any failed login. Unknown email and wrong password share it.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authentication flows over a credential store and a token version store.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    registry: TokenVersionRegistry,
    credentials: CredentialValidator,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl AuthService {
    /// Wires the auth core from configuration and the two stores.
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        versions: Arc<dyn TokenVersionStore>,
    ) -> AppResult<Self> {
        let hasher = PasswordHasher::new(config)?;
        let registry = TokenVersionRegistry::new(versions);

        Ok(Self {
            credentials: CredentialValidator::new(users.clone(), hasher.clone(), registry.clone()),
            issuer: TokenIssuer::new(JwtEncoder::new(config), registry.clone()),
            verifier: TokenVerifier::new(JwtDecoder::new(config), registry.clone()),
            users,
            hasher,
            registry,
        })
    }

    /// Verifier sharing this service's registry.
    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    /// Token version registry.
    pub fn registry(&self) -> &TokenVersionRegistry {
        &self.registry
    }

    /// Password hasher with the configured cost.
    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Credential store.
    pub fn users(&self) -> &Arc<dyn UserStore> {
        &self.users
    }

    /// Exchanges email and password for a token pair at the current version.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let Some(user) = self.credentials.validate(email, password).await? else {
            info!("Login rejected");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let pair = self.issuer.issue(&user, None).await?;
        info!(user_id = %user.id, "User logged in");
        Ok(pair)
    }

    /// Rotates a verified refresh token into a new pair.
    ///
    /// The bump revokes the presented refresh token and every access token
    /// issued alongside it.
    pub async fn refresh(&self, payload: &JwtPayload) -> AppResult<TokenPair> {
        let user = self
            .users
            .find_by_id(payload.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))?;

        let version = self.registry.bump(user.id).await?;
        let pair = self.issuer.issue(&user, Some(version)).await?;
        info!(user_id = %user.id, token_version = version, "Token pair refreshed");
        Ok(pair)
    }

    /// Revokes every token issued to the user so far. Returns the new version.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<i64> {
        let version = self.registry.bump(user_id).await?;
        info!(user_id = %user_id, token_version = version, "User logged out");
        Ok(version)
    }

    /// Current token version of a user.
    pub async fn current_version(&self, user_id: Uuid) -> AppResult<i64> {
        self.registry.current_version(user_id).await
    }

    /// Registers a user. An empty role list defaults to `PUBLIC`.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        roles: Vec<Role>,
    ) -> AppResult<User> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::bad_request(
                cinegate_database::repositories::USER_EXISTS_MESSAGE,
            ));
        }

        let roles = if roles.is_empty() {
            vec![Role::Public]
        } else {
            roles
        };
        let password_hash = self.hasher.hash_password_async(password.to_string()).await?;

        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                roles,
            })
            .await?;
        self.registry.ensure_initialized(user.id).await?;

        info!(user_id = %user.id, roles = ?user.roles, "User created");
        Ok(user)
    }
}

//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cinegate_auth::{AuthService, RoleGate, TokenVerifier};
use cinegate_core::config::AppConfig;
use cinegate_core::result::AppResult;
use cinegate_core::traits::TokenVersionStore;
use cinegate_database::repositories::UserStore;

/// Shared application state, cheap to clone per request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Login, refresh, logout, and user creation.
    pub auth: Arc<AuthService>,
    /// Role check used by the gate middleware.
    pub gate: RoleGate,
}

impl AppState {
    /// Builds the state over already-initialized stores.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        versions: Arc<dyn TokenVersionStore>,
    ) -> AppResult<Self> {
        let auth = AuthService::new(&config.auth, users, versions)?;
        Ok(Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            gate: RoleGate::new(),
        })
    }

    /// Token verifier shared with the auth service.
    pub fn verifier(&self) -> &TokenVerifier {
        self.auth.verifier()
    }
}

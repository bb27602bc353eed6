//! Builds signed token pairs for a user.

use tracing::debug;

use cinegate_core::result::AppResult;
use cinegate_entity::user::User;

use crate::jwt::{JwtEncoder, JwtPayload, TokenPair};
use crate::version::TokenVersionRegistry;

/// Signs access/refresh pairs at the user's current (or an explicit) version.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    encoder: JwtEncoder,
    registry: TokenVersionRegistry,
}

impl TokenIssuer {
    /// Creates a new issuer.
    pub fn new(encoder: JwtEncoder, registry: TokenVersionRegistry) -> Self {
        Self { encoder, registry }
    }

    /// Issues a pair. Without an explicit version the registry's current
    /// value is embedded. Nothing is persisted.
    pub async fn issue(&self, user: &User, version: Option<i64>) -> AppResult<TokenPair> {
        let version = match version {
            Some(v) => v,
            None => self.registry.current_version(user.id).await?,
        };

        let payload = JwtPayload::for_user(user, version);
        let pair = self.encoder.encode_pair(&payload)?;
        debug!(user_id = %user.id, token_version = version, "Issued token pair");
        Ok(pair)
    }
}

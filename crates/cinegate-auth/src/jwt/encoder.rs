//! Token signing with per-kind secrets and lifetimes.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use cinegate_core::config::AuthConfig;
use cinegate_core::error::AppError;

use super::TokenKind;
use super::claims::{Claims, JwtPayload};

/// Signs access and refresh tokens (HS256).
#[derive(Clone)]
pub struct JwtEncoder {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    issuer: Option<String>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Lifetimes beyond what chrono can represent saturate; `encode` then
/// rejects them when the expiry overflows.
fn ttl(seconds: u64) -> Duration {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

/// A freshly issued access/refresh pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Longer-lived refresh token.
    pub refresh_token: String,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl: ttl(config.access_ttl_seconds),
            refresh_ttl: ttl(config.refresh_ttl_seconds),
            issuer: config.issuer.clone(),
        }
    }

    /// Signs one token of the given kind.
    pub fn encode(&self, kind: TokenKind, payload: &JwtPayload) -> Result<String, AppError> {
        let (key, ttl) = match kind {
            TokenKind::Access => (&self.access_key, self.access_ttl),
            TokenKind::Refresh => (&self.refresh_key, self.refresh_ttl),
        };

        let now = Utc::now();
        let expires = now.checked_add_signed(ttl).ok_or_else(|| {
            AppError::configuration(format!("{kind:?} token lifetime is out of range"))
        })?;
        let claims = Claims {
            payload: payload.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, key)
            .map_err(|e| AppError::internal(format!("Failed to encode {kind:?} token: {e}")))
    }

    /// Signs an access and a refresh token over the same payload.
    pub fn encode_pair(&self, payload: &JwtPayload) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.encode(TokenKind::Access, payload)?,
            refresh_token: self.encode(TokenKind::Refresh, payload)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegate_core::error::ErrorKind;
    use cinegate_entity::user::Role;
    use uuid::Uuid;

    fn payload() -> JwtPayload {
        JwtPayload {
            sub: Uuid::new_v4(),
            email: "admin@example.com".into(),
            roles: vec![Role::Admin],
            token_version: 0,
        }
    }

    #[test]
    fn test_ttl_saturates_instead_of_wrapping() {
        assert_eq!(ttl(900), Duration::seconds(900));
        assert_eq!(ttl(u64::MAX), Duration::MAX);
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let config = AuthConfig {
            access_secret: "access-secret-for-tests".into(),
            refresh_secret: "refresh-secret-for-tests".into(),
            refresh_ttl_seconds: u64::MAX,
            ..AuthConfig::default()
        };
        let encoder = JwtEncoder::new(&config);

        assert!(encoder.encode(TokenKind::Access, &payload()).is_ok());
        let err = encoder.encode_pair(&payload()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}

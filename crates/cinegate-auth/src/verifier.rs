//! One verification routine for access and refresh tokens.

use serde_json::Value;
use tracing::debug;

use cinegate_core::error::AppError;
use cinegate_core::result::AppResult;

use crate::jwt::{JwtDecoder, JwtPayload, TokenKind};
use crate::version::TokenVersionRegistry;

/// Body field carrying the refresh token.
pub const REFRESH_TOKEN_FIELD: &str = "refreshToken";

/// Where a raw token is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `Authorization: Bearer <token>`.
    AuthorizationHeader,
    /// A string field of the JSON request body.
    BodyField(&'static str),
}

impl TokenSource {
    /// Source used for each token kind.
    pub fn for_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Access => Self::AuthorizationHeader,
            TokenKind::Refresh => Self::BodyField(REFRESH_TOKEN_FIELD),
        }
    }

    /// Pulls the raw token out of the request pieces.
    pub fn extract<'a>(
        self,
        authorization: Option<&'a str>,
        body: Option<&'a Value>,
    ) -> AppResult<&'a str> {
        match self {
            Self::AuthorizationHeader => {
                let header = authorization
                    .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;
                header
                    .strip_prefix("Bearer ")
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
            }
            Self::BodyField(field) => body
                .and_then(|b| b.get(field))
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| AppError::unauthorized(format!("Missing {field}"))),
        }
    }
}

/// Checks signature, expiry, and the embedded version of a token.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    decoder: JwtDecoder,
    registry: TokenVersionRegistry,
}

impl TokenVerifier {
    /// Creates a new verifier.
    pub fn new(decoder: JwtDecoder, registry: TokenVersionRegistry) -> Self {
        Self { decoder, registry }
    }

    /// Verifies a raw token of the given kind and returns its payload.
    pub async fn verify(&self, kind: TokenKind, raw: &str) -> AppResult<JwtPayload> {
        let payload = self.decoder.decode(kind, raw)?;

        if !self
            .registry
            .is_valid(payload.sub, payload.token_version)
            .await?
        {
            debug!(
                user_id = %payload.sub,
                token_version = payload.token_version,
                ?kind,
                "Rejected token with stale version"
            );
            return Err(AppError::unauthorized(kind.revoked_message()));
        }

        Ok(payload)
    }

    /// Extracts the token from its kind's source, then verifies it.
    pub async fn authenticate(
        &self,
        kind: TokenKind,
        authorization: Option<&str>,
        body: Option<&Value>,
    ) -> AppResult<JwtPayload> {
        let raw = TokenSource::for_kind(kind).extract(authorization, body)?;
        self.verify(kind, raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cinegate_cache::MemoryTokenVersionStore;
    use cinegate_core::config::AuthConfig;
    use cinegate_core::error::ErrorKind;
    use cinegate_entity::user::Role;
    use serde_json::json;
    use uuid::Uuid;

    use crate::jwt::JwtEncoder;

    struct Fixture {
        encoder: JwtEncoder,
        registry: TokenVersionRegistry,
        verifier: TokenVerifier,
    }

    fn fixture() -> Fixture {
        let config = AuthConfig {
            access_secret: "verifier-access".into(),
            refresh_secret: "verifier-refresh".into(),
            ..AuthConfig::default()
        };
        let registry = TokenVersionRegistry::new(Arc::new(MemoryTokenVersionStore::new()));
        Fixture {
            encoder: JwtEncoder::new(&config),
            verifier: TokenVerifier::new(JwtDecoder::new(&config), registry.clone()),
            registry,
        }
    }

    fn payload(version: i64) -> JwtPayload {
        JwtPayload {
            sub: Uuid::new_v4(),
            email: "user@example.com".into(),
            roles: vec![Role::Public],
            token_version: version,
        }
    }

    #[test]
    fn test_header_extraction() {
        let source = TokenSource::AuthorizationHeader;
        assert_eq!(source.extract(Some("Bearer abc"), None).unwrap(), "abc");

        let missing = source.extract(None, None).unwrap_err();
        assert_eq!(missing.kind, ErrorKind::Unauthorized);
        assert!(source.extract(Some("Basic abc"), None).is_err());
        assert!(source.extract(Some("Bearer "), None).is_err());
    }

    #[test]
    fn test_body_extraction() {
        let source = TokenSource::for_kind(TokenKind::Refresh);
        let body = json!({ "refreshToken": "xyz" });
        assert_eq!(source.extract(None, Some(&body)).unwrap(), "xyz");

        let wrong_type = json!({ "refreshToken": 42 });
        assert!(source.extract(None, Some(&wrong_type)).is_err());
        assert!(source.extract(Some("Bearer xyz"), None).is_err());
    }

    #[tokio::test]
    async fn test_current_version_accepted() {
        let f = fixture();
        let payload = payload(0);
        let token = f.encoder.encode(TokenKind::Access, &payload).unwrap();

        let verified = f.verifier.verify(TokenKind::Access, &token).await.unwrap();
        assert_eq!(verified, payload);
    }

    #[tokio::test]
    async fn test_stale_version_rejected_per_kind() {
        let f = fixture();
        let payload = payload(0);
        let pair = f.encoder.encode_pair(&payload).unwrap();
        f.registry.bump(payload.sub).await.unwrap();

        let access = f
            .verifier
            .verify(TokenKind::Access, &pair.access_token)
            .await
            .unwrap_err();
        assert_eq!(access.kind, ErrorKind::Unauthorized);
        assert_eq!(access.message, "Token has been revoked");

        let body = json!({ "refreshToken": pair.refresh_token });
        let refresh = f
            .verifier
            .authenticate(TokenKind::Refresh, None, Some(&body))
            .await
            .unwrap_err();
        assert_eq!(refresh.message, "Refresh token has been revoked");
    }

    #[tokio::test]
    async fn test_authenticate_from_header() {
        let f = fixture();
        let payload = payload(0);
        let token = f.encoder.encode(TokenKind::Access, &payload).unwrap();
        let header = format!("Bearer {token}");

        let verified = f
            .verifier
            .authenticate(TokenKind::Access, Some(&header), None)
            .await
            .unwrap();
        assert_eq!(verified.sub, payload.sub);
    }
}

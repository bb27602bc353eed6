//! Signature and expiry checks for both token kinds.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use cinegate_core::config::AuthConfig;
use cinegate_core::error::AppError;

use super::TokenKind;
use super::claims::{Claims, JwtPayload};

/// Validates token signatures against the secret of the expected kind.
#[derive(Clone)]
pub struct JwtDecoder {
    access_key: DecodingKey,
    refresh_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            access_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token of the given kind, checking signature and expiry only.
    ///
    /// The version check against the registry happens in the verifier.
    pub fn decode(&self, kind: TokenKind, token: &str) -> Result<JwtPayload, AppError> {
        let key = match kind {
            TokenKind::Access => &self.access_key,
            TokenKind::Refresh => &self.refresh_key,
        };

        let data = decode::<Claims>(token, key, &self.validation).map_err(|e| match e.kind() {
            JwtErrorKind::ExpiredSignature => AppError::unauthorized("Token has expired"),
            JwtErrorKind::InvalidSignature => AppError::unauthorized("Invalid token signature"),
            JwtErrorKind::InvalidIssuer => AppError::unauthorized("Invalid token issuer"),
            _ => AppError::unauthorized("Invalid token"),
        })?;

        Ok(data.claims.payload)
    }
}

//! Authentication configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;

/// Local-only signing secret for access tokens.
pub const FALLBACK_ACCESS_SECRET: &str = "default-secret-key";

/// Local-only signing secret for refresh tokens.
pub const FALLBACK_REFRESH_SECRET: &str = "default-refresh-secret-key";

/// Upper bound for either token lifetime (ten years).
pub const MAX_TOKEN_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Token signing and account bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret for access tokens.
    #[serde(default = "default_access_secret")]
    pub access_secret: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_seconds: u64,
    /// HMAC-SHA256 secret for refresh tokens.
    #[serde(default = "default_refresh_secret")]
    pub refresh_secret: String,
    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_seconds: u64,
    /// Optional `iss` claim stamped on and required of every token.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Clock skew tolerance applied to `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Argon2id memory cost in KiB for newly hashed passwords.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2id iteration count for newly hashed passwords.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Upsert the demo accounts when the server starts.
    #[serde(default)]
    pub seed_demo_users: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: default_access_secret(),
            access_ttl_seconds: default_access_ttl(),
            refresh_secret: default_refresh_secret(),
            refresh_ttl_seconds: default_refresh_ttl(),
            issuer: None,
            leeway_seconds: 0,
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            seed_demo_users: false,
        }
    }
}

impl AuthConfig {
    /// Whether either signing secret is still the built-in local fallback.
    pub fn uses_fallback_secret(&self) -> bool {
        self.access_secret == FALLBACK_ACCESS_SECRET
            || self.refresh_secret == FALLBACK_REFRESH_SECRET
    }

    /// Reject settings that would let tokens be forged or cross-used.
    ///
    /// Fallback secrets are tolerated outside production with a warning.
    pub fn validate(&self, production: bool) -> Result<(), AppError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(AppError::configuration("Token signing secrets must not be empty"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "auth.access_secret and auth.refresh_secret must differ",
            ));
        }
        if self.access_ttl_seconds == 0 || self.refresh_ttl_seconds == 0 {
            return Err(AppError::configuration("Token lifetimes must be positive"));
        }
        if self.access_ttl_seconds > MAX_TOKEN_TTL_SECONDS
            || self.refresh_ttl_seconds > MAX_TOKEN_TTL_SECONDS
        {
            return Err(AppError::configuration(format!(
                "Token lifetimes must not exceed {MAX_TOKEN_TTL_SECONDS} seconds"
            )));
        }
        if self.uses_fallback_secret() {
            if production {
                return Err(AppError::configuration(
                    "Fallback signing secrets are not allowed in production",
                ));
            }
            warn!(
                "Using fallback token signing secrets; set CINEGATE__AUTH__ACCESS_SECRET and CINEGATE__AUTH__REFRESH_SECRET"
            );
        }
        Ok(())
    }
}

fn default_access_secret() -> String {
    FALLBACK_ACCESS_SECRET.to_string()
}

fn default_refresh_secret() -> String {
    FALLBACK_REFRESH_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    15 * 60
}

fn default_refresh_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AuthConfig {
        AuthConfig {
            access_secret: "access-test".into(),
            refresh_secret: "refresh-test".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_fallback_allowed_in_development() {
        let config = AuthConfig::default();
        assert!(config.uses_fallback_secret());
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_fallback_rejected_in_production() {
        let err = AuthConfig::default().validate(true).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
        assert!(configured().validate(true).is_ok());
    }

    #[test]
    fn test_identical_secrets_rejected() {
        let config = AuthConfig {
            refresh_secret: "access-test".into(),
            ..configured()
        };
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_oversized_ttl_rejected() {
        let config = AuthConfig {
            refresh_ttl_seconds: u64::MAX,
            ..configured()
        };
        assert!(config.validate(false).is_err());

        let config = AuthConfig {
            access_ttl_seconds: MAX_TOKEN_TTL_SECONDS,
            ..configured()
        };
        assert!(config.validate(true).is_ok());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = AuthConfig {
            access_ttl_seconds: 0,
            ..configured()
        };
        assert!(config.validate(false).is_err());
    }
}

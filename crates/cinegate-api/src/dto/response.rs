//! Response DTOs.

use serde::{Deserialize, Serialize};

use cinegate_auth::JwtPayload;

/// Plain message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body of `/public`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicDataResponse {
    pub message: String,
    pub access: String,
}

/// Body of `/protected`: echoes the authenticated principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedDataResponse {
    pub message: String,
    pub user: JwtPayload,
}

/// Body of the role-restricted routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictedDataResponse {
    pub message: String,
    pub access: String,
    /// Email of the principal.
    pub user: String,
}

/// Authenticated principal as seen by `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    #[serde(flatten)]
    pub principal: JwtPayload,
    /// Version currently held by the registry.
    pub current_token_version: i64,
}

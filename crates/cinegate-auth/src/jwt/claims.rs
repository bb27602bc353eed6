//! JWT claim set embedded in access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cinegate_entity::user::{Role, User};

/// Identity carried by a token and exposed as the authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtPayload {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// User email at issuance.
    pub email: String,
    /// User roles at issuance.
    pub roles: Vec<Role>,
    /// Token version at issuance.
    pub token_version: i64,
}

impl JwtPayload {
    /// Build the payload for a user at the given version.
    pub fn for_user(user: &User, token_version: i64) -> Self {
        Self {
            sub: user.id,
            email: user.email.clone(),
            roles: user.roles.clone(),
            token_version,
        }
    }
}

/// Full encoded claim set: the payload plus registered time claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: JwtPayload,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

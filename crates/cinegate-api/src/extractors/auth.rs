//! Principal extractors for access and refresh tokens.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde_json::Value;

use cinegate_auth::{JwtPayload, TokenKind};
use cinegate_core::error::AppError;

use crate::state::AppState;

/// Principal authenticated by the bearer access token.
///
/// Reuses the payload stored by the role gate when the route is gated,
/// otherwise verifies the `Authorization` header itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub JwtPayload);

impl std::ops::Deref for AuthUser {
    type Target = JwtPayload;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(payload) = parts.extensions.get::<JwtPayload>() {
            return Ok(Self(payload.clone()));
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let payload = state
            .verifier()
            .authenticate(TokenKind::Access, header, None)
            .await?;
        parts.extensions.insert(payload.clone());
        Ok(Self(payload))
    }
}

/// Principal authenticated by the `refreshToken` body field.
#[derive(Debug, Clone)]
pub struct RefreshUser(pub JwtPayload);

impl FromRequest<AppState> for RefreshUser {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        // An absent or unreadable body carries no token, which is a 401.
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => Some(body),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Refresh body not readable as JSON");
                None
            }
        };

        let payload = state
            .verifier()
            .authenticate(TokenKind::Refresh, None, body.as_ref())
            .await?;
        Ok(Self(payload))
    }
}

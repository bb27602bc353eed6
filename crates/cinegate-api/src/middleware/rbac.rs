//! Role gate middleware.
//!
//! Every restricted route carries its own [`RequiredRoles`] through
//! [`RoleGuard`]; the single [`role_gate`] function authenticates the bearer
//! token, checks the roles, and hands the principal to the handler via
//! request extensions.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use cinegate_auth::{RequiredRoles, TokenKind};
use cinegate_core::error::AppError;

use crate::state::AppState;

/// Middleware state: the app plus one route's role requirement.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    state: AppState,
    required: RequiredRoles,
}

impl RoleGuard {
    /// Requirement for a route.
    pub fn new(state: AppState, required: RequiredRoles) -> Self {
        Self { state, required }
    }
}

/// 401 when the access token fails, 403 when the roles do not intersect.
pub async fn role_gate(
    State(guard): State<RoleGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let payload = guard
        .state
        .verifier()
        .authenticate(TokenKind::Access, header, None)
        .await?;

    if let Err(e) = guard.state.gate.require(&payload.roles, &guard.required) {
        debug!(
            user_id = %payload.sub,
            required = %guard.required,
            "Role gate denied request"
        );
        return Err(e);
    }

    request.extensions_mut().insert(payload);
    Ok(next.run(request).await)
}

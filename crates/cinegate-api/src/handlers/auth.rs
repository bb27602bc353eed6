//! Auth handlers: login, refresh, logout, me.

use axum::Json;
use axum::extract::State;

use cinegate_auth::TokenPair;
use cinegate_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{MeResponse, MessageResponse};
use crate::extractors::{AuthUser, RefreshUser, ValidatedJson};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let tokens = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    RefreshUser(payload): RefreshUser,
) -> Result<Json<TokenPair>, AppError> {
    let tokens = state.auth.refresh(&payload).await?;
    Ok(Json(tokens))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth.logout(auth.sub).await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    let current_token_version = state.auth.current_version(principal.sub).await?;
    Ok(Json(MeResponse {
        principal,
        current_token_version,
    }))
}

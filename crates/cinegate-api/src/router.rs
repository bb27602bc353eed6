//! Route definitions for the CineGate HTTP API.
//!
//! Public routes bypass authentication entirely. Each restricted route is
//! wrapped in the role gate with its own [`RequiredRoles`].

use axum::{
    Router, middleware as axum_middleware,
    routing::{MethodRouter, get, post},
};

use cinegate_auth::RequiredRoles;
use cinegate_entity::user::Role;

use crate::handlers;
use crate::middleware::rbac::{RoleGuard, role_gate};
use crate::state::AppState;

/// Build the router with all routes. Layers are added in `app::build_app`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(restricted_routes(&state))
        .with_state(state)
}

/// Routes reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::demo::hello))
        .route("/public", get(handlers::demo::public_data))
        .route("/health", get(handlers::health::health))
}

/// Login, refresh, logout, me. Each handler authenticates via its extractor.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

fn restricted_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(gated(
            state,
            "/protected",
            get(handlers::demo::protected_data),
            RequiredRoles::authenticated(),
        ))
        .merge(gated(
            state,
            "/staff",
            get(handlers::demo::staff_data),
            RequiredRoles::any_of([Role::Staff, Role::Admin]),
        ))
        .merge(gated(
            state,
            "/admin",
            get(handlers::demo::admin_data),
            RequiredRoles::any_of([Role::Admin]),
        ))
}

fn gated(
    state: &AppState,
    path: &str,
    handler: MethodRouter<AppState>,
    required: RequiredRoles,
) -> Router<AppState> {
    Router::new()
        .route(path, handler)
        .route_layer(axum_middleware::from_fn_with_state(
            RoleGuard::new(state.clone(), required),
            role_gate,
        ))
}

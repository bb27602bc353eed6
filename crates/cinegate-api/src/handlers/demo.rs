//! Demonstration routes for each access level.

use axum::Json;

use crate::dto::response::{ProtectedDataResponse, PublicDataResponse, RestrictedDataResponse};
use crate::extractors::AuthUser;

/// GET /
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// GET /public
pub async fn public_data() -> Json<PublicDataResponse> {
    Json(PublicDataResponse {
        message: "This is public data".to_string(),
        access: "public".to_string(),
    })
}

/// GET /protected
pub async fn protected_data(AuthUser(user): AuthUser) -> Json<ProtectedDataResponse> {
    Json(ProtectedDataResponse {
        message: "This is protected data".to_string(),
        user,
    })
}

/// GET /staff
pub async fn staff_data(auth: AuthUser) -> Json<RestrictedDataResponse> {
    Json(RestrictedDataResponse {
        message: "This is staff-only data".to_string(),
        access: "staff".to_string(),
        user: auth.email.clone(),
    })
}

/// GET /admin
pub async fn admin_data(auth: AuthUser) -> Json<RestrictedDataResponse> {
    Json(RestrictedDataResponse {
        message: "This is admin-only data".to_string(),
        access: "admin".to_string(),
        user: auth.email.clone(),
    })
}

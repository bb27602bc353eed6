//! HTTP response mapping for [`AppError`], enabled by the `axum` feature.
//!
//! Every error body has the shape `{ "error": CODE, "message": text }`.
//! Server-side kinds are logged and answered with a generic message so
//! store or configuration details never reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorKind {
    /// HTTP status and public error code for this kind.
    ///
    /// Returns `None` for kinds that are reported as a generic 500.
    pub fn client_status(&self) -> Option<(StatusCode, &'static str)> {
        match self {
            Self::Validation => Some((StatusCode::BAD_REQUEST, "VALIDATION_ERROR")),
            Self::BadRequest => Some((StatusCode::BAD_REQUEST, "BAD_REQUEST")),
            Self::Unauthorized => Some((StatusCode::UNAUTHORIZED, "UNAUTHORIZED")),
            Self::Forbidden => Some((StatusCode::FORBIDDEN, "FORBIDDEN")),
            Self::NotFound => Some((StatusCode::NOT_FOUND, "NOT_FOUND")),
            Self::Internal
            | Self::Database
            | Self::Cache
            | Self::Configuration
            | Self::Serialization => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Some((status, code)) = self.kind.client_status() else {
            tracing::error!(kind = %self.kind, error = %self.message, "Internal server error");
            let body = ApiErrorResponse {
                error: "INTERNAL_ERROR".to_string(),
                message: "Internal server error".to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}

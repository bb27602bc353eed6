//! Error responses returned by the API.
//!
//! `AppError` implements `IntoResponse` in `cinegate-core` (feature `axum`),
//! so handlers, extractors and middleware return it directly.

pub use cinegate_core::http::ApiErrorResponse;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use cinegate_core::error::AppError;

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, ApiErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::unauthorized("x"), StatusCode::UNAUTHORIZED),
            (AppError::forbidden("x"), StatusCode::FORBIDDEN),
            (AppError::bad_request("x"), StatusCode::BAD_REQUEST),
            (AppError::validation("x"), StatusCode::BAD_REQUEST),
            (AppError::not_found("x"), StatusCode::NOT_FOUND),
            (AppError::cache("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(body_of(err).await.0, status);
        }
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let (status, body) = body_of(AppError::database("relation \"users\" missing")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, "Internal server error");

        let (_, body) = body_of(AppError::unauthorized("Token has been revoked")).await;
        assert_eq!(body.error, "UNAUTHORIZED");
        assert_eq!(body.message, "Token has been revoked");
    }
}

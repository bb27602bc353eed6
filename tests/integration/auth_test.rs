//! Login, refresh rotation, logout, and revocation over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use cinegate_database::repositories::UserStore;

use crate::helpers::{TestApp, tokens};

#[tokio::test]
async fn test_public_routes() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello World!");

    let (status, body) = app.get("/public", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "This is public data", "access": "public" }));

    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_returns_pair() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(
            "/auth/login",
            None,
            Some(json!({ "email": "admin@example.com", "password": "admin123" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let pair = tokens(&body);
    assert_ne!(pair.access, pair.refresh);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_identical() {
    let app = TestApp::new().await;

    let wrong = app
        .post(
            "/auth/login",
            None,
            Some(json!({ "email": "admin@example.com", "password": "nope" })),
        )
        .await;
    let unknown = app
        .post(
            "/auth/login",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "admin123" })),
        )
        .await;

    assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
    assert_eq!(wrong.1["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(
            "/auth/login",
            None,
            Some(json!({ "email": "not-an-email", "password": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_refresh_rotates_once() {
    let app = TestApp::new().await;
    let first = app.login("user@example.com", "user123").await;

    let (status, body) = app.refresh(&first.refresh).await;
    assert_eq!(status, StatusCode::OK);
    let second = tokens(&body);

    let (status, body) = app.refresh(&first.refresh).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Refresh token has been revoked");

    let (status, _) = app.get("/protected", Some(&first.access)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.get("/protected", Some(&second.access)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rejects_access_token_and_missing_field() {
    let app = TestApp::new().await;
    let pair = app.login("user@example.com", "user123").await;

    let (status, _) = app.refresh(&pair.access).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.post("/auth/refresh", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_without_body_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/auth/refresh", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Missing refreshToken");
}

#[tokio::test]
async fn test_logout_revokes_unexpired_tokens() {
    let app = TestApp::new().await;
    let pair = app.login("staff@example.com", "staff123").await;

    let (status, body) = app.post("/auth/logout", Some(&pair.access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Logged out successfully" }));

    let (status, body) = app.get("/protected", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token has been revoked");

    let (status, _) = app.refresh(&pair.refresh).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.post("/auth/logout", Some(&pair.access), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_requires_token() {
    let app = TestApp::new().await;
    let (status, body) = app.post("/auth/logout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");

    let (status, _) = app.post("/auth/logout", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_relogin_after_logout() {
    let app = TestApp::new().await;
    let pair = app.login("user@example.com", "user123").await;
    app.post("/auth/logout", Some(&pair.access), None).await;

    let fresh = app.login("user@example.com", "user123").await;
    let (status, body) = app.get("/auth/me", Some(&fresh.access)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenVersion"], 1);
    assert_eq!(body["currentTokenVersion"], 1);
}

#[tokio::test]
async fn test_concurrent_logouts_count_exactly() {
    let app = TestApp::new().await;
    let user = app
        .state
        .auth
        .users()
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    let user_id = user.id;

    let bumps = (0..25).map(|_| {
        let auth = app.state.auth.clone();
        tokio::spawn(async move { auth.logout(user_id).await })
    });
    for result in futures::future::join_all(bumps).await {
        result.unwrap().unwrap();
    }

    assert_eq!(app.state.auth.current_version(user_id).await.unwrap(), 25);
}

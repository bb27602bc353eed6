//! Role gate behavior on the demo routes.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_reaches_everything_until_logout() {
    let app = TestApp::new().await;
    let pair = app.login("admin@example.com", "admin123").await;

    let (status, body) = app.get("/staff", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access"], "staff");
    assert_eq!(body["user"], "admin@example.com");

    let (status, body) = app.get("/admin", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "This is admin-only data");

    let (status, _) = app.post("/auth/logout", Some(&pair.access), None).await;
    assert_eq!(status, StatusCode::OK);

    let fresh = app.login("admin@example.com", "admin123").await;
    let (_, me) = app.get("/auth/me", Some(&fresh.access)).await;
    assert_eq!(me["currentTokenVersion"], 1);

    let (status, _) = app.get("/admin", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_user_is_forbidden_not_unauthorized() {
    let app = TestApp::new().await;
    let pair = app.login("user@example.com", "user123").await;

    let (status, body) = app.get("/protected", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "This is protected data");
    assert_eq!(body["user"]["email"], "user@example.com");
    assert_eq!(body["user"]["roles"], serde_json::json!(["PUBLIC"]));

    let (status, body) = app.get("/staff", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Insufficient permissions");

    let (status, _) = app.get("/admin", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_is_not_admin() {
    let app = TestApp::new().await;
    let pair = app.login("staff@example.com", "staff123").await;

    let (status, _) = app.get("/staff", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/admin", Some(&pair.access)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_gated_routes_require_token() {
    let app = TestApp::new().await;
    for path in ["/protected", "/staff", "/admin"] {
        let (status, _) = app.get(path, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = TestApp::new().await;
    let pair = app.login("admin@example.com", "admin123").await;

    let (status, _) = app.get("/admin", Some(&pair.refresh)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use cinegate_api::{AppState, build_app};
use cinegate_auth::seed::seed_demo_users;
use cinegate_cache::MemoryTokenVersionStore;
use cinegate_core::config::{AppConfig, AuthConfig};
use cinegate_database::repositories::MemoryUserRepository;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct registry access
    pub state: AppState,
}

/// Tokens returned by a successful login or refresh.
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

impl TestApp {
    /// App on in-memory stores with the demo accounts seeded.
    pub async fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                access_secret: "integration-access-secret".into(),
                refresh_secret: "integration-refresh-secret".into(),
                hash_memory_kib: 8,
                hash_iterations: 1,
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let state = AppState::new(
            config,
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryTokenVersionStore::new()),
        )
        .expect("state should build");
        seed_demo_users(state.auth.users(), state.auth.hasher())
            .await
            .expect("seeding should succeed");

        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Send a request and return the status and body (JSON, or a JSON string
    /// for plain text bodies).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn get(&self, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, bearer, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send(Method::POST, uri, bearer, body).await
    }

    /// Log in and return the issued pair, panicking on failure.
    pub async fn login(&self, email: &str, password: &str) -> Tokens {
        let (status, body) = self
            .post(
                "/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        tokens(&body)
    }

    /// Refresh with the given token, returning the raw response.
    pub async fn refresh(&self, refresh_token: &str) -> (StatusCode, Value) {
        self.post(
            "/auth/refresh",
            None,
            Some(serde_json::json!({ "refreshToken": refresh_token })),
        )
        .await
    }
}

/// Extract the pair from a login/refresh body.
pub fn tokens(body: &Value) -> Tokens {
    Tokens {
        access: body["accessToken"]
            .as_str()
            .expect("accessToken present")
            .to_string(),
        refresh: body["refreshToken"]
            .as_str()
            .expect("refreshToken present")
            .to_string(),
    }
}

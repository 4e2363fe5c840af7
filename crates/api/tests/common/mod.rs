//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` via
//! [`civica_api::router::build_app_router`] so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery)
//! that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use civica_api::config::ServerConfig;
use civica_api::notify::{EmailConfig, Notifier};
use civica_api::router::build_app_router;
use civica_api::state::AppState;
use civica_api::storage::BlobStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir().join("civica-test-uploads"),
        public_base_url: "http://localhost:3000".to_string(),
        email: None,
    }
}

/// Build the full application router with email delivery disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_notifier(pool, Notifier::disabled())
}

/// Build the full application router with a custom notifier (e.g. one
/// pointed at an unreachable SMTP host to exercise delivery failure).
pub fn build_test_app_with_notifier(pool: PgPool, notifier: Notifier) -> Router {
    let config = test_config();
    let blobs = BlobStore::new(config.upload_dir.clone(), config.public_base_url.clone());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier: Arc::new(notifier),
        blobs: Arc::new(blobs),
    };

    build_app_router(state, &config)
}

/// SMTP configuration pointing at a port nothing listens on.
pub fn unreachable_smtp() -> EmailConfig {
    EmailConfig {
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 9,
        from_address: "noreply@civica.local".to_string(),
        smtp_user: None,
        smtp_password: None,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

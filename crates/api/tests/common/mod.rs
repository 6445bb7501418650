//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, so they
//! exercise the exact middleware stack production uses without a TCP listener.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use onepartners_api::config::{AdminCredentials, ServerConfig};
use onepartners_api::router::build_app_router;
use onepartners_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults. Upload and static dirs
/// point at `target/`-local scratch paths; tests that serve files override
/// them with a tempdir.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        upload_dir: std::env::temp_dir().join("onepartners-test-uploads"),
        static_dir: std::env::temp_dir().join("onepartners-test-static"),
        admin: AdminCredentials {
            id: "admin1".to_string(),
            password: "adminone1".to_string(),
            token: "admin-token-123".to_string(),
        },
    }
}

/// Migrate the pool and build the application router with default test config.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config()).await
}

/// Migrate the pool and build the application router with the given config.
///
/// Mirrors the startup sequence in `main.rs` (migrate, create upload dir,
/// assemble state and router) minus the seed loader, so tests start from
/// empty collections.
pub async fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    onepartners_db::schema::run_migrations(&pool)
        .await
        .expect("migrations failed");
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("upload dir creation failed");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A test config whose upload directory is the given path.
pub fn config_with_upload_dir(dir: &Path) -> ServerConfig {
    ServerConfig {
        upload_dir: dir.to_path_buf(),
        ..test_config()
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a multipart request with a single part under `field_name`.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field_name: &str,
    filename: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "onepartners-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("invalid JSON body: {e}"))
}

//! HTTP-level integration tests for `POST /api/upload` and `/uploads` serving.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, config_with_upload_dir, get, post_multipart};
use sqlx::SqlitePool;

#[sqlx::test]
async fn uploaded_bytes_round_trip_through_the_returned_url(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_upload_dir(dir.path());

    let payload = b"%PDF-1.4 pretend structural calc sheet";
    let app = common::build_test_app_with(pool.clone(), config.clone()).await;
    let response = post_multipart(app, "/api/upload", "file", "calc.pdf", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "calc.pdf");
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with("-calc.pdf"));

    // Fetching the URL returns the exact bytes submitted.
    let app = common::build_test_app_with(pool, config).await;
    let response = get(app, url).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, payload);
}

#[sqlx::test]
async fn concurrent_uploads_of_the_same_name_get_distinct_urls(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_upload_dir(dir.path());

    let mut urls = Vec::new();
    for _ in 0..2 {
        let app = common::build_test_app_with(pool.clone(), config.clone()).await;
        let response = post_multipart(app, "/api/upload", "file", "dup.bin", b"same").await;
        assert_eq!(response.status(), StatusCode::OK);
        urls.push(body_json(response).await["url"].as_str().unwrap().to_string());
    }
    assert_ne!(urls[0], urls[1]);
}

#[sqlx::test]
async fn upload_is_not_capped_by_the_default_body_limit(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_upload_dir(dir.path());

    // Larger than axum's default 2 MB request body cap.
    let payload = vec![0x42u8; 3 * 1024 * 1024];
    let app = common::build_test_app_with(pool.clone(), config.clone()).await;
    let response = post_multipart(app, "/api/upload", "file", "big-drawing.dwg", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let url = body_json(response).await["url"].as_str().unwrap().to_string();
    let app = common::build_test_app_with(pool, config).await;
    let response = get(app, &url).await;
    assert_eq!(body_bytes(response).await, payload);
}

#[sqlx::test]
async fn upload_without_file_field_returns_400(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_upload_dir(dir.path());

    let app = common::build_test_app_with(pool, config).await;
    let response = post_multipart(app, "/api/upload", "attachment", "x.txt", b"hi").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

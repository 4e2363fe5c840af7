//! Integration tests for the image upload endpoint and static retrieval.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::body_json;
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "civica-test-boundary";

fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_multipart(app: axum::Router, uri: &str, body: Vec<u8>) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_returns_a_servable_url(pool: PgPool) {
    let app = common::build_test_app(pool);

    let payload = b"fake jpeg bytes";
    let response = post_multipart(
        app.clone(),
        "/api/v1/upload-image",
        multipart_body("file", "pothole photo.jpg", payload),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let url = json["url"].as_str().expect("url must be a string");
    assert!(url.contains("/uploads/"), "unexpected url: {url}");
    // Whitespace in the original filename is sanitized away.
    assert!(!url.contains(' '));
    assert!(url.ends_with(".jpg"));

    // The stored file is retrievable through the static uploads mount.
    let path = url.rsplit_once("/uploads/").unwrap().1;
    let fetched = common::get(app, &format!("/uploads/{path}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let bytes = http_body_util::BodyExt::collect(fetched.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(bytes.as_ref(), payload);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_without_file_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_multipart(
        app,
        "/api/v1/upload-image",
        multipart_body("attachment", "photo.jpg", b"bytes"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::test_server;

#[tokio::test]
async fn test_me_without_token() {
    let server = test_server();

    let response = server.get("/api/auth/me").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(
        body["error"],
        "Authentication error: Missing Authorization header"
    );
}

#[tokio::test]
async fn test_me_with_wrong_scheme() {
    let server = test_server();

    let response = server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic YWRtaW46YWRtaW4="))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_validates_before_touching_storage() {
    let server = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "Ana", "email": "not-an-email", "password": "secret1" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let server = test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "Ana", "email": "ana@salon.com", "password": "123" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

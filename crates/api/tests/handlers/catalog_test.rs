use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::test_server;

#[rstest]
#[case::negative_skip("skip", -1)]
#[case::zero_limit("limit", 0)]
#[case::limit_too_large("limit", 501)]
#[tokio::test]
async fn test_service_listing_validates_pagination(#[case] key: &str, #[case] value: i64) {
    let server = test_server();

    let response = server
        .get("/api/services")
        .add_query_param(key, value)
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_service_requires_token() {
    let server = test_server();

    let response = server
        .post("/api/services")
        .json(&json!({ "name": "Corte", "price": 50.0, "duration_minutes": 30 }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_service_rejects_malformed_token() {
    let server = test_server();

    let response = server
        .delete(&format!("/api/services/{}", Uuid::new_v4()))
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer not-a-token"))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case::users("/api/users")]
#[case::products("/api/products")]
#[tokio::test]
async fn test_protected_reads_require_token(#[case] path: &str) {
    let server = test_server();

    let response = server.get(path).expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_financial_report_requires_token() {
    let server = test_server();

    let response = server
        .get("/api/reports/financial")
        .add_query_param("year", 2026)
        .add_query_param("month", 1)
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_product_usage_requires_token() {
    let server = test_server();

    let response = server
        .post(&format!("/api/products/{}/usage", Uuid::new_v4()))
        .add_query_param("quantity", 2)
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

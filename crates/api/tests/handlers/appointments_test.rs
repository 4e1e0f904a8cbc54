use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::test_server;

#[rstest]
#[case::month_zero("/api/appointments/month", &[("year", "2026"), ("month", "0")])]
#[case::month_thirteen("/api/appointments/month", &[("year", "2026"), ("month", "13")])]
#[case::year_zero("/api/appointments/month", &[("year", "0"), ("month", "5")])]
#[case::slashes("/api/appointments/day", &[("date", "2026/01/20")])]
#[case::impossible_day("/api/appointments/day", &[("date", "2026-02-30")])]
#[case::not_a_date("/api/appointments/day", &[("date", "tomorrow")])]
#[tokio::test]
async fn test_calendar_views_reject_bad_input(
    #[case] path: &str,
    #[case] params: &[(&str, &str)],
) {
    let server = test_server();

    let mut request = server.get(path);
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    let response = request.expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_month_error_names_the_month() {
    let server = test_server();

    let response = server
        .get("/api/appointments/month")
        .add_query_param("year", 2026)
        .add_query_param("month", 0)
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Validation error: Month must be between 1 and 12, got 0"
    );
}

#[tokio::test]
async fn test_create_appointment_requires_client_name() {
    let server = test_server();

    let response = server
        .post("/api/appointments")
        .json(&json!({
            "client_name": "   ",
            "service_id": Uuid::new_v4(),
            "employee_id": Uuid::new_v4(),
            "start_time": "2026-01-20T14:00:00",
        }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_appointment_rejects_malformed_body() {
    let server = test_server();

    let response = server
        .post("/api/appointments")
        .json(&json!({ "client_name": "Ana" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_listing_requires_authentication() {
    let server = test_server();

    let response = server.get("/api/appointments").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_status_update_requires_authentication() {
    let server = test_server();

    let response = server
        .patch(&format!("/api/appointments/{}/status", Uuid::new_v4()))
        .json(&json!({ "status": "concluido" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use salon_api::middleware::{auth, error_handling::map_error};
use salon_core::errors::SalonError;

#[rstest]
#[case::not_found(SalonError::NotFound("Resource not found".to_string()), StatusCode::NOT_FOUND)]
#[case::validation(SalonError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case::conflict(SalonError::Conflict("Slot taken".to_string()), StatusCode::CONFLICT)]
#[case::authentication(
    SalonError::Authentication("Invalid password".to_string()),
    StatusCode::UNAUTHORIZED
)]
#[case::authorization(SalonError::Authorization("Not authorized".to_string()), StatusCode::FORBIDDEN)]
#[case::database(SalonError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::internal(
    SalonError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: SalonError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
    assert!(auth::verify_password(password, &hashed));
}

#[test]
fn test_hashes_are_salted() {
    let first = auth::hash_password("same_password").unwrap();
    let second = auth::hash_password("same_password").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_issued_tokens_parse() {
    let session_id = uuid::Uuid::new_v4();
    let token = auth::format_token(session_id, &auth::generate_token_secret());

    let (parsed, _) = auth::parse_token(&token).unwrap();
    assert_eq!(parsed, session_id);
}

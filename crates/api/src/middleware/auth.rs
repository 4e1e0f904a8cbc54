//! # Authentication Module
//!
//! Password hashing, access token issuance and the role gates applied to
//! route groups.
//!
//! Access tokens are opaque bearer strings of the form
//! `<session-id>.<secret-hex>`. Only a SHA-256 digest of the session id and
//! secret is stored, next to the session owner and its expiry. Passwords are
//! hashed with Argon2.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use eyre::Result;
use rand::RngCore;
use salon_core::{
    access::Principal,
    errors::{SalonError, SalonResult},
    models::{auth::TokenResponse, user::{Role, User}},
};
use salon_db::repositories::session;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Number of random bytes in a token secret.
pub const TOKEN_SECRET_BYTES: usize = 32;

/// Hashes a password using the Argon2 algorithm
///
/// Returns the hash in PHC string format (algorithm, parameters, salt and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a password against a stored PHC hash. Malformed hashes never match.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }
    encoded
}

/// Stored verifier for a token: hex SHA-256 over `<session-id>:<secret>`.
pub fn digest_secret(session_id: Uuid, secret: &str) -> String {
    let input = format!("{}:{}", session_id.simple(), secret.to_ascii_lowercase());
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

/// Random token secret, hex encoded.
pub fn generate_token_secret() -> String {
    let mut secret = [0_u8; TOKEN_SECRET_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut secret);
    encode_hex(&secret)
}

pub fn format_token(session_id: Uuid, secret: &str) -> String {
    format!("{}.{}", session_id.simple(), secret)
}

/// Splits an access token into its session id and secret.
pub fn parse_token(token: &str) -> SalonResult<(Uuid, &str)> {
    let invalid = || SalonError::Authentication("Malformed access token".to_string());

    let (id, secret) = token.split_once('.').ok_or_else(invalid)?;
    let id = Uuid::try_parse(id).map_err(|_| invalid())?;
    if secret.len() != TOKEN_SECRET_BYTES * 2 || !secret.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    Ok((id, secret))
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> SalonResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| SalonError::Authentication("Missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| SalonError::Authentication("Invalid Authorization header".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(SalonError::Authentication(
            "Authorization header must use the Bearer scheme".to_string(),
        )),
    }
}

/// Opens a session for `user` and returns the token response.
pub async fn issue_token(state: &ApiState, user: &User) -> SalonResult<TokenResponse> {
    let session_id = Uuid::new_v4();
    let secret = generate_token_secret();
    let secret_hash = digest_secret(session_id, &secret);
    let now = Utc::now();
    let expires_at = now.checked_add_signed(state.token_ttl).ok_or_else(|| {
        SalonError::Internal("Token lifetime exceeds the supported date range".into())
    })?;

    let purged = session::delete_expired_sessions(&state.db_pool, now).await?;
    if purged > 0 {
        tracing::debug!("Purged {} expired sessions", purged);
    }

    session::create_session(&state.db_pool, session_id, user.id, &secret_hash, expires_at).await?;
    tracing::debug!("Issued session {} for user {}", session_id, user.id);

    Ok(TokenResponse::bearer(
        format_token(session_id, &secret),
        user.name.clone(),
        user.role,
    ))
}

/// Resolves an access token to the principal it was issued for.
///
/// # Errors
///
/// * `SalonError::Authentication` - malformed, unknown or expired token, or a
///   deactivated account
pub async fn authenticate(pool: &PgPool, token: &str) -> SalonResult<Principal> {
    let rejected = || SalonError::Authentication("Invalid or expired access token".to_string());
    let (session_id, secret) = parse_token(token)?;

    let session = session::get_live_session(pool, session_id, Utc::now())
        .await?
        .ok_or_else(rejected)?;
    if digest_secret(session_id, secret) != session.secret_hash {
        return Err(rejected());
    }

    let user = session::get_session_user(pool, &session)
        .await?
        .ok_or_else(rejected)?;
    let user = User::try_from(user)?;

    Ok(Principal {
        user_id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    })
}

/// Authenticates the request, checks the caller's role against `allowed` and
/// exposes the [`Principal`] to handlers as a request extension.
pub async fn authorize(
    state: &ApiState,
    mut request: Request,
    next: Next,
    allowed: &[Role],
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let principal = authenticate(&state.db_pool, token).await?;
    principal.require_role(allowed)?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Any authenticated user.
pub async fn require_user(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, &[Role::Client, Role::Employee, Role::Admin]).await
}

/// Employees and admins.
pub async fn require_staff(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, Role::STAFF).await
}

pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, &[Role::Admin]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_hash_and_verify_password() {
        let hashed = hash_password("test_password").unwrap();

        assert!(hashed.starts_with("$argon2"));
        assert!(verify_password("test_password", &hashed));
        assert!(!verify_password("wrong_password", &hashed));
        assert!(!verify_password("test_password", "not-a-phc-string"));
    }

    #[test]
    fn test_token_round_trip() {
        let session_id = Uuid::new_v4();
        let secret = generate_token_secret();
        let token = format_token(session_id, &secret);

        let (parsed_id, parsed_secret) = parse_token(&token).unwrap();

        assert_eq!(parsed_id, session_id);
        assert_eq!(parsed_secret, secret);
        assert_eq!(secret.len(), TOKEN_SECRET_BYTES * 2);
    }

    #[test]
    fn test_digest_secret_binds_session_id() {
        let secret = generate_token_secret();
        let session_id = Uuid::new_v4();
        let digest = digest_secret(session_id, &secret);

        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest_secret(session_id, &secret.to_ascii_uppercase()));
        assert_ne!(digest, digest_secret(Uuid::new_v4(), &secret));
        assert_ne!(digest, digest_secret(session_id, &generate_token_secret()));
    }

    #[test]
    fn test_parse_token_rejects_garbage() {
        let id = Uuid::new_v4().simple().to_string();

        assert!(parse_token("no-dot-here").is_err());
        assert!(parse_token(&format!("{}.{}", "not-a-uuid", "a".repeat(64))).is_err());
        assert!(parse_token(&format!("{}.{}", id, "abc")).is_err());
        assert!(parse_token(&format!("{}.{}", id, "z".repeat(64))).is_err());
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert!(matches!(bearer_token(&headers), Err(SalonError::Authentication(_))));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def");

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer   xyz"));
        assert_eq!(bearer_token(&headers).unwrap(), "xyz");
    }
}

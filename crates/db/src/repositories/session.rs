use crate::models::{DbSession, DbUser};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_session(
    pool: &Pool<Postgres>,
    id: Uuid,
    user_id: Uuid,
    secret_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<DbSession> {
    let now = Utc::now();

    let session = sqlx::query_as::<_, DbSession>(
        r#"
        INSERT INTO sessions (id, user_id, secret_hash, expires_at, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, secret_hash, expires_at, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(secret_hash)
    .bind(expires_at)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Looks up a session that has not expired yet.
pub async fn get_live_session(
    pool: &Pool<Postgres>,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<Option<DbSession>> {
    let session = sqlx::query_as::<_, DbSession>(
        r#"
        SELECT id, user_id, secret_hash, expires_at, created_at
        FROM sessions
        WHERE id = $1 AND expires_at > $2
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Owner of a session, provided the account is still active.
pub async fn get_session_user(pool: &Pool<Postgres>, session: &DbSession) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, role, commission_percent, active, created_at
        FROM users
        WHERE id = $1 AND active = TRUE
        "#,
    )
    .bind(session.user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn delete_expired_sessions(pool: &Pool<Postgres>, now: DateTime<Utc>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE expires_at <= $1
        "#,
    )
    .bind(now)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

use crate::models::DbAppointment;
use chrono::{NaiveDateTime, Utc};
use eyre::Result;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

pub async fn list_appointments(
    pool: &Pool<Postgres>,
    offset: i64,
    limit: i64,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        FROM appointments
        ORDER BY start_time DESC
        OFFSET $1
        LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Non-cancelled appointments with `from <= start_time < to`, optionally for a
/// single employee.
pub async fn get_active_appointments_starting_between(
    pool: &Pool<Postgres>,
    from: NaiveDateTime,
    to: NaiveDateTime,
    employee_id: Option<Uuid>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        FROM appointments
        WHERE start_time >= $1
          AND start_time < $2
          AND status <> 'cancelado'
          AND ($3::uuid IS NULL OR employee_id = $3)
        ORDER BY start_time ASC
        "#,
    )
    .bind(from)
    .bind(to)
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Serialises bookings for one employee until the surrounding transaction ends.
pub async fn lock_employee_agenda(conn: &mut PgConnection, employee_id: Uuid) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
        .bind(employee_id)
        .execute(conn)
        .await?;

    Ok(())
}

/// Non-cancelled appointments of one employee with `from <= start_time < to`,
/// read on the connection holding the agenda lock.
pub async fn get_employee_agenda(
    conn: &mut PgConnection,
    employee_id: Uuid,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        FROM appointments
        WHERE employee_id = $1
          AND status <> 'cancelado'
          AND start_time >= $2
          AND start_time < $3
        ORDER BY start_time ASC
        "#,
    )
    .bind(employee_id)
    .bind(from)
    .bind(to)
    .fetch_all(conn)
    .await?;

    Ok(appointments)
}

pub async fn insert_appointment(
    conn: &mut PgConnection,
    client_name: &str,
    service_id: Uuid,
    employee_id: Uuid,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, client_name, service_id, employee_id, start_time, end_time, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, 'agendado', $7)
        RETURNING id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        "#,
    )
    .bind(id)
    .bind(client_name)
    .bind(service_id)
    .bind(employee_id)
    .bind(start)
    .bind(end)
    .bind(now)
    .fetch_one(conn)
    .await?;

    Ok(appointment)
}

/// Compare-and-set on the status column. Returns `None` when the appointment
/// is missing or its status is no longer `expected`.
pub async fn update_status_if(
    pool: &Pool<Postgres>,
    id: Uuid,
    expected: &str,
    status: &str,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $3
        WHERE id = $1 AND status = $2
        RETURNING id, client_name, service_id, employee_id, start_time, end_time, status, created_at
        "#,
    )
    .bind(id)
    .bind(expected)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

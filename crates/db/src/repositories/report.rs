use crate::models::DbRevenueRow;
use chrono::NaiveDateTime;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Completed appointments joined with their service price and the
/// professional's commission, optionally restricted to `from <= start_time < to`.
pub async fn get_completed_revenue(
    pool: &Pool<Postgres>,
    range: Option<(NaiveDateTime, NaiveDateTime)>,
) -> Result<Vec<DbRevenueRow>> {
    let (from, to) = match range {
        Some((from, to)) => (Some(from), Some(to)),
        None => (None, None),
    };

    let rows = sqlx::query_as::<_, DbRevenueRow>(
        r#"
        SELECT a.employee_id, u.name AS employee_name, s.price, u.commission_percent
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        JOIN users u ON u.id = a.employee_id
        WHERE a.status = 'concluido'
          AND ($1::timestamp IS NULL OR a.start_time >= $1)
          AND ($2::timestamp IS NULL OR a.start_time < $2)
        ORDER BY a.start_time ASC
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

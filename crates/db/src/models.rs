use chrono::{DateTime, NaiveDateTime, Utc};
use eyre::{eyre, Report};
use rust_decimal::Decimal;
use salon_core::{
    finance::RevenueEntry,
    models::{
        appointment::{Appointment, AppointmentStatus},
        product::Product,
        service::Service,
        user::{Role, User},
    },
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub commission_percent: Option<Decimal>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProduct {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub client_name: String,
    pub service_id: Uuid,
    pub employee_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub secret_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DbRevenueRow {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub price: Decimal,
    pub commission_percent: Option<Decimal>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            duration_minutes: row.duration_minutes,
            active: row.active,
            created_at: row.created_at,
        }
    }
}

impl From<DbProduct> for Product {
    fn from(row: DbProduct) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            unit: row.unit,
            created_at: row.created_at,
        }
    }
}

impl TryFrom<DbUser> for User {
    type Error = Report;

    fn try_from(row: DbUser) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|_| eyre!("User {} has unknown role '{}'", row.id, row.role))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role,
            commission_percent: row.commission_percent,
            active: row.active,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|_| eyre!("Appointment {} has unknown status '{}'", row.id, row.status))?;

        Ok(Self {
            id: row.id,
            client_name: row.client_name,
            service_id: row.service_id,
            employee_id: row.employee_id,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
            created_at: row.created_at,
        })
    }
}

impl From<DbRevenueRow> for RevenueEntry {
    fn from(row: DbRevenueRow) -> Self {
        Self {
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            price: row.price,
            commission_percent: row.commission_percent.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Converts a batch of rows, failing on the first malformed one.
pub fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, Report>
where
    T: TryFrom<R, Error = Report>,
{
    rows.into_iter().map(T::try_from).collect()
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

/// Longest bookable service, one full day.
pub const MAX_SERVICE_DURATION_MINUTES: i32 = 24 * 60;

/// A service offered by the salon.
///
/// Services are never hard-deleted once created; `active = false` hides them
/// from the catalog while keeping historical appointments valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub description: Option<String>,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> SalonResult<()> {
        if self.name.trim().is_empty() {
            return Err(SalonError::Validation("Service name must not be empty".to_string()));
        }
        if self.price.is_sign_negative() {
            return Err(SalonError::Validation("Service price must not be negative".to_string()));
        }
        if !(1..=MAX_SERVICE_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(SalonError::Validation(format!(
                "Service duration must be between 1 and {} minutes",
                MAX_SERVICE_DURATION_MINUTES
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteServiceResponse {
    pub id: Uuid,
    pub active: bool,
}

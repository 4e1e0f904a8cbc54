use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

pub const DEFAULT_UNIT: &str = "un";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub quantity: i32,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> SalonResult<()> {
        if self.name.trim().is_empty() {
            return Err(SalonError::Validation("Product name must not be empty".to_string()));
        }
        if self.quantity < 0 {
            return Err(SalonError::Validation("Initial stock must not be negative".to_string()));
        }
        if self.price.is_some_and(|price| price.is_sign_negative()) {
            return Err(SalonError::Validation("Product price must not be negative".to_string()));
        }
        Ok(())
    }

    pub fn unit(&self) -> &str {
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => unit,
            _ => DEFAULT_UNIT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUsageQuery {
    pub quantity: Option<i32>,
}

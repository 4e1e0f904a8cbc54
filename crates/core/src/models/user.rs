use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SalonError, SalonResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Commission applied to new employees when none is given.
pub fn default_commission_percent() -> Decimal {
    Decimal::new(30, 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Employee,
    Admin,
}

impl Role {
    pub const STAFF: &'static [Role] = &[Role::Employee, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// Staff members can be booked as the professional on an appointment.
    pub fn is_staff(self) -> bool {
        Role::STAFF.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SalonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "client" => Ok(Role::Client),
            "employee" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            other => Err(SalonError::Validation(format!(
                "Invalid role '{}'; expected one of client, employee, admin",
                other
            ))),
        }
    }
}

/// A user account. Staff users carry a commission percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub commission_percent: Option<Decimal>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Public view of a bookable professional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub commission_percent: Option<Decimal>,
}

impl From<User> for StaffMember {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            commission_percent: user.commission_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub commission_percent: Option<Decimal>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> SalonResult<()> {
        validate_identity(&self.name, &self.email, &self.password)?;
        if let Some(percent) = self.commission_percent {
            if percent.is_sign_negative() || percent > Decimal::ONE_HUNDRED {
                return Err(SalonError::Validation(
                    "Commission percent must be between 0 and 100".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn role(&self) -> Role {
        self.role.unwrap_or(Role::Client)
    }

    /// Staff without an explicit commission get the default; clients get none.
    pub fn effective_commission(&self) -> Option<Decimal> {
        if self.role().is_staff() {
            Some(self.commission_percent.unwrap_or_else(default_commission_percent))
        } else {
            None
        }
    }
}

pub(crate) fn validate_identity(name: &str, email: &str, password: &str) -> SalonResult<()> {
    if name.trim().is_empty() {
        return Err(SalonError::Validation("Name must not be empty".to_string()));
    }
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => {
            return Err(SalonError::Validation(format!("Invalid email address '{}'", email)));
        }
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SalonError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

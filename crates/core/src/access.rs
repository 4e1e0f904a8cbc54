//! Role checks applied to authenticated callers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{SalonError, SalonResult},
    models::user::Role,
};

/// The authenticated subject of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Principal {
    pub fn require_role(&self, allowed: &[Role]) -> SalonResult<()> {
        requires_role(self.role, allowed)
    }
}

/// Fails with `Authorization` unless `role` is one of `allowed`.
pub fn requires_role(role: Role, allowed: &[Role]) -> SalonResult<()> {
    if allowed.contains(&role) {
        return Ok(());
    }
    let allowed = allowed
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(SalonError::Authorization(format!(
        "Role {} is not allowed; requires one of: {}",
        role, allowed
    )))
}

//! Product stock rules. Stock never goes below zero.

use crate::errors::{SalonError, SalonResult};

pub const DEFAULT_USAGE: i32 = 1;

/// Amount to take from stock for a usage request; defaults to one unit.
pub fn usage_amount(requested: Option<i32>) -> SalonResult<i32> {
    let amount = requested.unwrap_or(DEFAULT_USAGE);
    if amount < 1 {
        return Err(SalonError::Validation(format!(
            "Usage quantity must be at least 1, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Stock left after using `used` units out of `current`.
pub fn remaining_stock(current: i32, used: i32) -> SalonResult<i32> {
    if used > current {
        return Err(SalonError::Validation(format!(
            "Insufficient stock: {} available, {} requested",
            current, used
        )));
    }
    Ok(current - used)
}

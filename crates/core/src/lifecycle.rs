//! Appointment status lifecycle.
//!
//! ```text
//! agendado ──> concluido
//!     └──────> cancelado
//! ```
//!
//! `concluido` and `cancelado` are terminal. Setting the current status again
//! is accepted as a no-op.

use crate::{
    errors::{SalonError, SalonResult},
    models::appointment::AppointmentStatus,
};

pub fn can_transition(from: AppointmentStatus, to: AppointmentStatus) -> bool {
    use AppointmentStatus::*;

    from == to || matches!((from, to), (Scheduled, Completed) | (Scheduled, Cancelled))
}

/// Statuses reachable from `from`, excluding `from` itself.
pub fn next_statuses(from: AppointmentStatus) -> Vec<AppointmentStatus> {
    AppointmentStatus::ALL
        .into_iter()
        .filter(|to| *to != from && can_transition(from, *to))
        .collect()
}

pub fn ensure_transition(from: AppointmentStatus, to: AppointmentStatus) -> SalonResult<()> {
    if can_transition(from, to) {
        return Ok(());
    }

    let allowed = next_statuses(from)
        .into_iter()
        .map(AppointmentStatus::as_str)
        .collect::<Vec<_>>();
    Err(SalonError::Validation(format!(
        "Cannot change appointment status from {} to {}; next allowed: [{}]",
        from,
        to,
        allowed.join(", ")
    )))
}

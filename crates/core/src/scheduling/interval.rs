use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{SalonError, SalonResult},
    models::appointment::Appointment,
};

/// Half-open time range `[start, end)`.
///
/// Two ranges that only touch at an endpoint do not overlap, so back-to-back
/// appointments are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> SalonResult<Self> {
        if end <= start {
            return Err(SalonError::Validation(format!(
                "Time range end {} must be after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Range starting at `start` and lasting `duration_minutes`.
    pub fn for_duration(start: NaiveDateTime, duration_minutes: i32) -> SalonResult<Self> {
        Self::new(start, end_time(start, duration_minutes)?)
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

}

/// Computes `start + duration_minutes`.
pub fn end_time(start: NaiveDateTime, duration_minutes: i32) -> SalonResult<NaiveDateTime> {
    if duration_minutes <= 0 {
        return Err(SalonError::Validation(format!(
            "Duration must be positive, got {} minutes",
            duration_minutes
        )));
    }
    start
        .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
        .ok_or_else(|| SalonError::Validation(format!("End time out of range for start {}", start)))
}

/// First appointment of `employee_id` that still occupies its slot and
/// overlaps `candidate`.
pub fn find_conflict<'a, I>(existing: I, employee_id: Uuid, candidate: &TimeRange) -> Option<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    existing.into_iter().find(|appointment| {
        appointment.employee_id == employee_id
            && appointment.status.occupies_slot()
            && candidate.overlaps(&TimeRange {
                start: appointment.start_time,
                end: appointment.end_time,
            })
    })
}

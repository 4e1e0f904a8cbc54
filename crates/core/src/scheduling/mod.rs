//! # Scheduling
//!
//! Booking rules for appointments: derived end times, half-open interval
//! overlap between appointments of the same professional, and the calendar
//! ranges used by the month and day views.
//!
//! The [`SchedulingEngine`] validates requests and delegates persistence to a
//! [`SchedulingStore`]. Stores must perform the overlap check and the insert
//! atomically; the engine never inserts on its own.

mod calendar;
mod engine;
mod interval;

pub use calendar::{day_range, month_range, parse_day, year_range};
pub use engine::{MockSchedulingStore, NewAppointment, SchedulingEngine, SchedulingStore};
pub use interval::{end_time, find_conflict, TimeRange};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    errors::{SalonError, SalonResult},
    scheduling::TimeRange,
};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn check_year(year: i32) -> SalonResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(SalonError::Validation(format!(
            "Year must be between {} and {}, got {}",
            MIN_YEAR, MAX_YEAR, year
        )));
    }
    Ok(())
}

fn first_of_month(year: i32, month: u32) -> SalonResult<NaiveDate> {
    check_year(year)?;
    if !(1..=12).contains(&month) {
        return Err(SalonError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SalonError::Validation(format!("Invalid month {}-{:02}", year, month)))
}

fn first_of_next_month(first: NaiveDate) -> SalonResult<NaiveDate> {
    first
        .checked_add_months(chrono::Months::new(1))
        .ok_or_else(|| SalonError::Validation(format!("Month after {} is out of range", first)))
}

/// `[first instant of the month, first instant of the next month)`.
pub fn month_range(year: i32, month: u32) -> SalonResult<TimeRange> {
    let first = first_of_month(year, month)?;
    let next = first_of_next_month(first)?;
    TimeRange::new(midnight(first), midnight(next))
}

/// `[Jan 1st 00:00, Jan 1st of the next year 00:00)`.
pub fn year_range(year: i32) -> SalonResult<TimeRange> {
    let first = first_of_month(year, 1)?;
    let next = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or_else(|| SalonError::Validation(format!("Year after {} is out of range", year)))?;
    TimeRange::new(midnight(first), midnight(next))
}

/// `[00:00 of date, 00:00 of the following day)`.
pub fn day_range(date: NaiveDate) -> SalonResult<TimeRange> {
    let next = date
        .succ_opt()
        .ok_or_else(|| SalonError::Validation(format!("Day after {} is out of range", date)))?;
    TimeRange::new(midnight(date), midnight(next))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_day(value: &str) -> SalonResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SalonError::Validation(format!("Invalid date '{}'; expected YYYY-MM-DD", value))
    })
}

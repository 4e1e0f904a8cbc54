//! Revenue and commission over completed appointments.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    errors::{SalonError, SalonResult},
    models::report::{EmployeeEarnings, FinancialQuery, FinancialSummary},
    scheduling::{self, TimeRange},
};

/// One completed appointment priced with its service and the commission of
/// the professional who performed it.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueEntry {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub price: Decimal,
    pub commission_percent: Decimal,
}

impl RevenueEntry {
    pub fn commission(&self) -> Decimal {
        (self.price * self.commission_percent / Decimal::ONE_HUNDRED).round_dp(2)
    }
}

/// Period covered by a report; `None` means all time.
pub fn report_range(query: &FinancialQuery) -> SalonResult<Option<TimeRange>> {
    match (query.year, query.month) {
        (Some(year), Some(month)) => scheduling::month_range(year, month).map(Some),
        (Some(year), None) => scheduling::year_range(year).map(Some),
        (None, Some(_)) => Err(SalonError::Validation(
            "A month filter requires a year".to_string(),
        )),
        (None, None) => Ok(None),
    }
}

pub fn summarize(entries: &[RevenueEntry]) -> FinancialSummary {
    let mut by_employee: HashMap<Uuid, EmployeeEarnings> = HashMap::new();
    let mut revenue = Decimal::ZERO;
    let mut commission = Decimal::ZERO;

    for entry in entries {
        let entry_commission = entry.commission();
        revenue += entry.price;
        commission += entry_commission;

        let earnings = by_employee
            .entry(entry.employee_id)
            .or_insert_with(|| EmployeeEarnings {
                employee_id: entry.employee_id,
                name: entry.employee_name.clone(),
                appointments: 0,
                revenue: Decimal::ZERO,
                commission: Decimal::ZERO,
            });
        earnings.appointments += 1;
        earnings.revenue += entry.price;
        earnings.commission += entry_commission;
    }

    let mut by_employee: Vec<EmployeeEarnings> = by_employee.into_values().collect();
    by_employee.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));

    FinancialSummary {
        completed_appointments: entries.len() as u32,
        revenue,
        commission,
        profit: revenue - commission,
        by_employee,
    }
}

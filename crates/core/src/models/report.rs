use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Per-professional totals over completed appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEarnings {
    pub employee_id: Uuid,
    pub name: String,
    pub appointments: u32,
    pub revenue: Decimal,
    pub commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub completed_appointments: u32,
    pub revenue: Decimal,
    pub commission: Decimal,
    pub profit: Decimal,
    pub by_employee: Vec<EmployeeEarnings>,
}

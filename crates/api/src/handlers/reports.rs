use axum::{
    extract::{Query, State},
    Json,
};
use eyre::Result;
use salon_core::{
    errors::SalonError,
    finance::{self, RevenueEntry},
    models::report::{FinancialQuery, FinancialSummary},
};
use salon_db::repositories::report;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Revenue, commission and profit over completed appointments, for all time,
/// a year, or a single month.
#[axum::debug_handler]
pub async fn financial_summary(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<FinancialQuery>,
) -> Result<Json<FinancialSummary>, AppError> {
    let range = finance::report_range(&query)?;

    let rows = report::get_completed_revenue(&state.db_pool, range.map(|r| (r.start, r.end)))
        .await
        .map_err(SalonError::Database)?;
    let entries: Vec<RevenueEntry> = rows.into_iter().map(RevenueEntry::from).collect();

    Ok(Json(finance::summarize(&entries)))
}

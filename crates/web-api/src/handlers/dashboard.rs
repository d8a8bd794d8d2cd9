//! Dashboard and financial read endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rota_ops_dashboard::{
    cash_flow, ledger, CashFlowSummary, DashboardFilter, DashboardSnapshot, DateRange,
    LedgerEntry,
};

use crate::handlers::{internal_error, store_error};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub q: Option<String>,
}

impl DashboardQuery {
    /// Builds the filter; with no complete range the current calendar month
    /// applies, matching the dashboard's initial state.
    fn into_filter(self, today: NaiveDate) -> DashboardFilter {
        let range = match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange { start, end },
            _ => DateRange::month_of(today),
        };
        DashboardFilter {
            range: Some(range),
            search: self.q.unwrap_or_default(),
        }
    }
}

/// Returns the aggregated dashboard read-model for the requested window.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if any collection fetch fails.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    let now = Utc::now();
    let filter = query.into_filter(now.date_naive());
    let snapshot = state
        .service
        .snapshot(&filter, now)
        .await
        .map_err(internal_error)?;
    Ok(Json(snapshot))
}

#[derive(Debug, Serialize)]
pub struct FinancialResponse {
    pub summary: CashFlowSummary,
    pub ledger: Vec<LedgerEntry>,
}

/// Returns the cash-flow summary and unified statement for the window.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if a fetch fails.
pub async fn get_financial(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<FinancialResponse>, StatusCode> {
    let filter = query.into_filter(Utc::now().date_naive());

    let (orders, expenses) = tokio::try_join!(
        state.repos.orders.list_all(),
        state.repos.expenses.list_all(),
    )
    .map_err(store_error)?;

    let orders = filter.apply_orders(orders);
    let expenses = filter.apply_expenses(expenses);

    Ok(Json(FinancialResponse {
        summary: cash_flow(&orders, &expenses),
        ledger: ledger(&orders, &expenses),
    }))
}

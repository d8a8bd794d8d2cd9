//! Expense endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use rota_ops_core::models::{ExpenseRecord, NewExpense};

use crate::handlers::orders::IdResponse;
use crate::handlers::store_error;
use crate::AppState;

/// Lists expenses, most recent first.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the query fails.
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseRecord>>, StatusCode> {
    let records = state
        .repos
        .expenses
        .list_all()
        .await
        .map_err(store_error)?;

    Ok(Json(records))
}

/// Logs an expense and returns its id.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the insert fails.
pub async fn create_expense(
    State(state): State<AppState>,
    Json(expense): Json<NewExpense>,
) -> Result<(StatusCode, Json<IdResponse>), StatusCode> {
    let id = state
        .repos
        .expenses
        .insert(&expense, Utc::now())
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Removes an expense.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the expense doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the delete fails.
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .expenses
        .delete(id)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::NO_CONTENT)
}

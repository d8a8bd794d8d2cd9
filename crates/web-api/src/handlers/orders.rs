//! Order CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rota_ops_core::models::{NewOrder, OrderPatch, OrderRecord};
use rota_ops_dashboard::ListFilter;

use crate::handlers::store_error;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Lifecycle status to match; "Todos" or absent matches all
    pub status: Option<String>,
    /// Free-text filter on client name, phone, or product
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

/// Lists orders, optionally restricted to a placement-date window and a
/// status/text filter.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the query fails.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<OrderRecord>>, StatusCode> {
    let records = match (query.start, query.end) {
        (Some(start), Some(end)) => state.repos.orders.list_between(start, end).await,
        _ => state.repos.orders.list_all().await,
    }
    .map_err(store_error)?;

    let filter = ListFilter {
        status: query.status,
        search: query.q.unwrap_or_default(),
    };
    let records = records.into_iter().filter(|o| filter.matches(o)).collect();

    Ok(Json(records))
}

/// Creates an order and returns its id.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the insert fails.
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<NewOrder>,
) -> Result<(StatusCode, Json<IdResponse>), StatusCode> {
    let id = state
        .repos
        .orders
        .insert(&order, Utc::now())
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Applies a partial update to an order.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the order doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the update fails.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderPatch>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .orders
        .update(id, &patch)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::OK)
}

/// Deletes an order.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the order doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the delete fails.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .orders
        .delete(id)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::NO_CONTENT)
}

//! Future delivery endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use rota_ops_core::models::{FutureDeliveryPatch, FutureDeliveryRecord, NewFutureDelivery};

use crate::handlers::store_error;
use crate::AppState;

/// Lists scheduled deliveries, soonest first.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the query fails.
pub async fn list_deliveries(
    State(state): State<AppState>,
) -> Result<Json<Vec<FutureDeliveryRecord>>, StatusCode> {
    let records = state
        .repos
        .future_deliveries
        .list_all()
        .await
        .map_err(store_error)?;

    Ok(Json(records))
}

/// Schedules a delivery and returns the stored row.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the insert fails.
pub async fn create_delivery(
    State(state): State<AppState>,
    Json(delivery): Json<NewFutureDelivery>,
) -> Result<(StatusCode, Json<FutureDeliveryRecord>), StatusCode> {
    let record = state
        .repos
        .future_deliveries
        .insert(&delivery, Utc::now())
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Applies a partial update to a scheduled delivery.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the delivery doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the update fails.
pub async fn update_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<FutureDeliveryPatch>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .future_deliveries
        .update(id, &patch)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::OK)
}

#[derive(Debug, Deserialize)]
pub struct NoteBody {
    pub notes: String,
}

/// Overwrites the notes of a scheduled delivery.
///
/// The write is confirmed before the response is sent; there is no
/// speculative client-side state to roll back.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the delivery doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the update fails.
pub async fn set_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NoteBody>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .future_deliveries
        .set_notes(id, &body.notes)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::OK)
}

/// Marks a scheduled delivery as delivered.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the delivery doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the update fails.
pub async fn complete_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .future_deliveries
        .complete(id)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::OK)
}

/// Removes a scheduled delivery.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if the delivery doesn't exist, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the delete fails.
pub async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    state
        .repos
        .future_deliveries
        .delete(id)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::NO_CONTENT)
}

//! Request handlers, grouped by resource.

pub mod dashboard;
pub mod expenses;
pub mod future_deliveries;
pub mod health;
pub mod orders;

use axum::http::StatusCode;
use rota_ops_data::StoreError;

/// Maps a repository error to a response status. Database failures are logged
/// here and surfaced as plain 500s; they never reach the aggregation layer.
pub(crate) fn store_error(err: StoreError) -> StatusCode {
    match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Database(e) => {
            tracing::error!(error = %e, "database operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Maps a pipeline error to a 500 after logging it.
pub(crate) fn internal_error(err: anyhow::Error) -> StatusCode {
    tracing::error!(error = %err, "request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

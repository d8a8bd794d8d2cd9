//! Fetch → project → filter → aggregate pipeline.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use rota_ops_core::models::OrderRecord;
use rota_ops_core::traits::DashboardStore;

use crate::aggregate::{aggregate, DashboardData};
use crate::filter::DashboardFilter;

/// Read-model plus the separately-kept future delivery projections.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub data: DashboardData,
    /// Scheduled deliveries projected into the order shape; not part of the
    /// aggregated metrics and not subject to the dashboard filter
    pub future_orders: Vec<OrderRecord>,
}

/// Orchestrates one dashboard refresh against an injected store.
pub struct DashboardService<S> {
    store: S,
}

impl<S: DashboardStore> DashboardService<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Builds the dashboard read-model for one filter state.
    ///
    /// The three collection fetches run concurrently; aggregation starts only
    /// once all of them have resolved. `now` stamps the synthetic placement
    /// date of projected future deliveries.
    ///
    /// # Errors
    /// Returns an error if any collection fetch fails.
    pub async fn snapshot(
        &self,
        filter: &DashboardFilter,
        now: DateTime<Utc>,
    ) -> Result<DashboardSnapshot> {
        let (orders, future, expenses) = tokio::try_join!(
            self.store.list_orders(),
            self.store.list_future_deliveries(),
            self.store.list_expenses(),
        )?;

        let future_orders: Vec<OrderRecord> =
            future.iter().map(|f| f.as_order_view(now)).collect();

        let orders = filter.apply_orders(orders);
        let expenses = filter.apply_expenses(expenses);
        tracing::debug!(
            orders = orders.len(),
            expenses = expenses.len(),
            future = future_orders.len(),
            "aggregating dashboard snapshot"
        );

        Ok(DashboardSnapshot {
            data: aggregate(orders, expenses),
            future_orders,
        })
    }
}

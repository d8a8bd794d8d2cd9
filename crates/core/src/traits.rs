//! Store contracts for the read side of the dashboard.
//!
//! The aggregation pipeline receives these as explicit dependencies instead
//! of reaching for a process-wide client, so tests can substitute in-memory
//! doubles.

use crate::models::{ExpenseRecord, FutureDeliveryRecord, OrderRecord};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns every order, most recently created first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>>;
}

#[async_trait]
pub trait FutureDeliveryStore: Send + Sync {
    /// Returns every scheduled delivery, soonest first.
    async fn list_future_deliveries(&self) -> Result<Vec<FutureDeliveryRecord>>;
}

#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Returns every expense, most recent first.
    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>>;
}

/// Everything the dashboard pipeline fetches, in one bound.
pub trait DashboardStore: OrderStore + FutureDeliveryStore + ExpenseStore {}

impl<T: OrderStore + FutureDeliveryStore + ExpenseStore> DashboardStore for T {}

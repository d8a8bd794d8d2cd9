//! Database repositories for the delivery operations dashboard.
//!
//! Each repository provides typed access to one table. The [`Repositories`]
//! umbrella implements the core store traits consumed by the dashboard
//! pipeline.

pub mod expenses_repo;
pub mod future_deliveries_repo;
pub mod orders_repo;

pub use expenses_repo::ExpenseRepository;
pub use future_deliveries_repo::FutureDeliveryRepository;
pub use orders_repo::OrderRepository;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use rota_ops_core::models::{ExpenseRecord, FutureDeliveryRecord, OrderRecord};
use rota_ops_core::traits::{ExpenseStore, FutureDeliveryStore, OrderStore};

/// Creates all repositories from a single database pool.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub orders: OrderRepository,
    pub future_deliveries: FutureDeliveryRepository,
    pub expenses: ExpenseRepository,
}

impl Repositories {
    /// Creates a new set of repositories from a database pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool.clone()),
            future_deliveries: FutureDeliveryRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool),
        }
    }
}

#[async_trait]
impl OrderStore for Repositories {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>> {
        Ok(self.orders.list_all().await?)
    }
}

#[async_trait]
impl FutureDeliveryStore for Repositories {
    async fn list_future_deliveries(&self) -> Result<Vec<FutureDeliveryRecord>> {
        Ok(self.future_deliveries.list_all().await?)
    }
}

#[async_trait]
impl ExpenseStore for Repositories {
    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(self.expenses.list_all().await?)
    }
}

//! Data storage and access for the delivery operations dashboard.
//!
//! This crate provides:
//! - Database client for `PostgreSQL`
//! - Repositories for typed access to the orders, future deliveries, and
//!   expenses tables
//! - Implementations of the core store traits consumed by the dashboard
//!   pipeline

pub mod database;
pub mod error;
pub mod repositories;

pub use database::DatabaseClient;
pub use error::{StoreError, StoreResult};
pub use repositories::{
    ExpenseRepository, FutureDeliveryRepository, OrderRepository, Repositories,
};

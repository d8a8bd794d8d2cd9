//! Domain records for the delivery operations dashboard.
//!
//! All currency amounts use `rust_decimal::Decimal`. Records derive
//! `sqlx::FromRow` for database compatibility, and money fields tolerate
//! malformed wire input (anything unparseable becomes `None` and counts as
//! zero downstream).

mod de;
pub mod expense;
pub mod future_delivery;
pub mod order;

pub use expense::{ExpenseRecord, NewExpense, OUTFLOW};
pub use future_delivery::{FutureDeliveryPatch, FutureDeliveryRecord, NewFutureDelivery};
pub use order::{status, NewOrder, OrderPatch, OrderRecord, PaymentStatus};

pub mod config;
pub mod config_loader;
pub mod models;
pub mod traits;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use config_loader::ConfigLoader;
pub use models::{
    ExpenseRecord, FutureDeliveryPatch, FutureDeliveryRecord, NewExpense, NewFutureDelivery,
    NewOrder, OrderPatch, OrderRecord, PaymentStatus,
};
pub use traits::{DashboardStore, ExpenseStore, FutureDeliveryStore, OrderStore};

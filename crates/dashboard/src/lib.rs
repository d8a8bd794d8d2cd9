//! Dashboard read-model computation for the delivery operations system.
//!
//! This crate holds the read side: the pure aggregation that turns order and
//! expense records into KPIs, a per-region rollup, and a daily sales series,
//! plus the filters applied beforehand and the service that wires fetch →
//! project → filter → aggregate together. Nothing here persists anything.

pub mod aggregate;
pub mod filter;
pub mod financial;
pub mod report;
pub mod service;

pub use aggregate::{aggregate, DashboardData, Kpis, RegionStat, SalesPoint};
pub use filter::{DashboardFilter, DateRange, ListFilter};
pub use financial::{cash_flow, ledger, CashFlowSummary, LedgerEntry, LedgerKind};
pub use report::{format_brl, ReportFormatter};
pub use service::{DashboardService, DashboardSnapshot};

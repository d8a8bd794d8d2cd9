//! Cash-flow summary and unified financial statement.
//!
//! Inflows are commissions on orders whose COD was actually collected;
//! outflows come from the expenses table. Pending commission covers orders
//! still moving through the pipeline.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rota_ops_core::models::{status, ExpenseRecord, OrderRecord, PaymentStatus};

/// Category assigned to commission inflows in the statement.
const SALE_CATEGORY: &str = "Venda";

/// Totals for the financial view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Commissions on Collected orders
    pub inflows: Decimal,
    /// Sum of logged expenses
    pub outflows: Decimal,
    /// `inflows - outflows`
    pub net: Decimal,
    /// Commissions not yet collected: payment neither Collected nor Failed,
    /// order not canceled
    pub pending_commission: Decimal,
}

/// Builds the cash-flow totals from already-filtered records.
#[must_use]
pub fn cash_flow(orders: &[OrderRecord], expenses: &[ExpenseRecord]) -> CashFlowSummary {
    let inflows: Decimal = orders
        .iter()
        .filter(|o| o.payment() == Some(PaymentStatus::Collected))
        .map(|o| o.commission.unwrap_or_default())
        .sum();

    let outflows: Decimal = expenses.iter().map(|e| e.amount.unwrap_or_default()).sum();

    let pending_commission: Decimal = orders
        .iter()
        .filter(|o| {
            !matches!(
                o.payment(),
                Some(PaymentStatus::Collected | PaymentStatus::Failed)
            ) && o.order_status != status::CANCELED
        })
        .map(|o| o.commission.unwrap_or_default())
        .sum();

    CashFlowSummary {
        inflows,
        outflows,
        net: inflows - outflows,
        pending_commission,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Income,
    Expense,
}

/// One line of the unified statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Display id, prefixed to stay unique across the two sources
    pub id: String,
    pub source_id: i64,
    pub kind: LedgerKind,
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
}

/// Merges expenses and collected commissions into one statement, most recent
/// entry first. Income entries are dated by delivery when known.
#[must_use]
pub fn ledger(orders: &[OrderRecord], expenses: &[ExpenseRecord]) -> Vec<LedgerEntry> {
    let mut entries: Vec<LedgerEntry> = expenses
        .iter()
        .map(|e| LedgerEntry {
            id: format!("exp-{}", e.id),
            source_id: e.id,
            kind: LedgerKind::Expense,
            description: e.description.clone(),
            amount: e.amount.unwrap_or_default(),
            date: e.date,
            category: e.category.clone(),
        })
        .collect();

    entries.extend(
        orders
            .iter()
            .filter(|o| o.payment() == Some(PaymentStatus::Collected))
            .map(|o| {
                let reference = if o.order_number.is_empty() {
                    o.id.to_string()
                } else {
                    o.order_number.clone()
                };
                LedgerEntry {
                    id: format!("inc-{}", o.id),
                    source_id: o.id,
                    kind: LedgerKind::Income,
                    description: format!("Comissão #{reference}"),
                    amount: o.commission.unwrap_or_default(),
                    date: o.effective_date(),
                    category: SALE_CATEGORY.to_string(),
                }
            }),
    );

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

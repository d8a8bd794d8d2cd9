//! Expense data model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// Value of the `type` column for every user-created expense.
pub const OUTFLOW: &str = "saida";

/// A logged business expense.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExpenseRecord {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub description: String,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub amount: Option<Decimal>,
    pub date: DateTime<Utc>,
    pub category: String,
    /// Stored in the `type` column; always [`OUTFLOW`] for rows created here
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Payload for logging an expense. The `type` column is stamped on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kind_serializes_as_type() {
        let json = r#"{
            "id": 3,
            "description": "Combustível",
            "amount": 120.50,
            "date": "2025-11-10T00:00:00Z",
            "category": "Logística",
            "type": "saida"
        }"#;
        let expense: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(expense.kind, OUTFLOW);
        assert_eq!(expense.amount, Some(dec!(120.50)));

        let back = serde_json::to_value(&expense).unwrap();
        assert_eq!(back["type"], "saida");
    }
}

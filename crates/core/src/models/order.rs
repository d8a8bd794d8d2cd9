//! Order data model.
//!
//! One record per sale/delivery transaction. The lifecycle status column is
//! open-ended text (operators add values in the field); the payment status is
//! a closed set tracked by [`PaymentStatus`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// Lifecycle statuses with fixed behavior in the views. The column itself is
/// open-ended; anything else renders as-is and carries no special meaning.
pub mod status {
    pub const SCHEDULED: &str = "Agendado";
    pub const PENDING: &str = "Pendente";
    pub const IN_TRANSIT: &str = "Em Trânsito";
    pub const DELIVERED: &str = "Entregue";
    pub const COMPLETED: &str = "Completo";
    pub const CANCELED: &str = "Cancelado";
}

/// Collection state of the cash-on-delivery amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Amount not yet collected by the delivery agent.
    Pending,
    /// Agent collected the cash at drop-off.
    Collected,
    /// Collected cash was passed back to the treasury.
    Remitted,
    /// Collection was attempted and failed.
    Failed,
}

impl PaymentStatus {
    /// Returns the string representation stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Collected => "Collected",
            Self::Remitted => "Remitted",
            Self::Failed => "Failed",
        }
    }

    /// Parses the stored representation. Unknown values yield `None` and fall
    /// in neither cash partition.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Collected" => Some(Self::Collected),
            "Remitted" => Some(Self::Remitted),
            "Failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A sale/delivery transaction.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderRecord {
    /// Auto-generated identifier
    pub id: i64,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
    /// Human-facing order number (e.g. "ORD-1731672000000")
    pub order_number: String,
    /// Open-ended lifecycle status, see [`status`]
    pub order_status: String,
    /// Final sale price; absent or malformed counts as zero
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub order_final_price: Option<Decimal>,
    /// Units sold
    pub order_quantity: i32,
    /// When the order was placed
    #[serde(default)]
    pub date_order: Option<DateTime<Utc>>,
    /// When the order was (or will be) delivered
    #[serde(default)]
    pub date_delivery: Option<DateTime<Utc>>,
    pub client_name: String,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_document: Option<String>,
    pub client_phone: String,
    #[serde(default)]
    pub client_zip_code: Option<String>,
    #[serde(default)]
    pub client_address: Option<String>,
    #[serde(default)]
    pub client_address_number: Option<String>,
    #[serde(default)]
    pub client_address_district: Option<String>,
    #[serde(default)]
    pub client_address_city: Option<String>,
    #[serde(default)]
    pub client_address_state: Option<String>,
    #[serde(default)]
    pub client_address_comp: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub product_code: Option<String>,
    /// Seller commission on this order
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub commission: Option<Decimal>,
    /// Producer share of the commission
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub producer_commission: Option<Decimal>,
    #[serde(default)]
    pub logistic_operator: Option<String>,
    #[serde(default)]
    pub delivery_man: Option<String>,
    /// Stored form of [`PaymentStatus`]
    pub payment_status: String,
    /// Cash-on-delivery amount carried by the agent
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl OrderRecord {
    /// Parsed payment status, `None` for values outside the closed set.
    #[must_use]
    pub fn payment(&self) -> Option<PaymentStatus> {
        PaymentStatus::parse(&self.payment_status)
    }

    /// Whether the order reached the customer.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.order_status == status::DELIVERED || self.order_status == status::COMPLETED
    }

    /// Date used for range filtering and the financial statement: delivery
    /// date, falling back to order date, falling back to row creation.
    #[must_use]
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.date_delivery
            .or(self.date_order)
            .unwrap_or(self.created_at)
    }
}

/// Payload for creating an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_name: String,
    pub client_phone: String,
    pub product_name: String,
    #[serde(default)]
    pub product_code: Option<String>,
    pub order_quantity: i32,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub order_final_price: Option<Decimal>,
    #[serde(default)]
    pub order_status: Option<String>,
    /// Placement timestamp; the insert clock applies when absent
    #[serde(default)]
    pub date_order: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_delivery: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub client_address: Option<String>,
    #[serde(default)]
    pub client_address_city: Option<String>,
    #[serde(default)]
    pub client_address_state: Option<String>,
    #[serde(default)]
    pub logistic_operator: Option<String>,
    #[serde(default)]
    pub delivery_man: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an order; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub order_quantity: Option<i32>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub order_final_price: Option<Decimal>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub date_order: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_delivery: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn base_order() -> OrderRecord {
        let created = Utc.with_ymd_and_hms(2025, 11, 11, 10, 30, 0).unwrap();
        OrderRecord {
            id: 1,
            created_at: created,
            order_number: "ORD-1".to_string(),
            order_status: status::SCHEDULED.to_string(),
            order_final_price: Some(dec!(197.00)),
            order_quantity: 1,
            date_order: None,
            date_delivery: None,
            client_name: "João Silva".to_string(),
            client_email: None,
            client_document: None,
            client_phone: "(11) 99999-9999".to_string(),
            client_zip_code: None,
            client_address: None,
            client_address_number: None,
            client_address_district: None,
            client_address_city: None,
            client_address_state: None,
            client_address_comp: None,
            product_name: "Kit 3 Potes".to_string(),
            product_code: None,
            commission: Some(dec!(50.00)),
            producer_commission: None,
            logistic_operator: None,
            delivery_man: None,
            payment_status: "Pending".to_string(),
            cod_amount: Some(dec!(197.00)),
            notes: None,
        }
    }

    #[test]
    fn payment_status_round_trips() {
        for ps in [
            PaymentStatus::Pending,
            PaymentStatus::Collected,
            PaymentStatus::Remitted,
            PaymentStatus::Failed,
        ] {
            assert_eq!(PaymentStatus::parse(ps.as_str()), Some(ps));
        }
        assert_eq!(PaymentStatus::parse("Paid"), None);
        assert_eq!(PaymentStatus::parse("pending"), None);
    }

    #[test]
    fn delivered_statuses() {
        let mut order = base_order();
        assert!(!order.is_delivered());
        order.order_status = status::DELIVERED.to_string();
        assert!(order.is_delivered());
        order.order_status = status::COMPLETED.to_string();
        assert!(order.is_delivered());
    }

    #[test]
    fn effective_date_prefers_delivery_then_order() {
        let mut order = base_order();
        assert_eq!(order.effective_date(), order.created_at);

        let placed = Utc.with_ymd_and_hms(2025, 11, 12, 9, 0, 0).unwrap();
        order.date_order = Some(placed);
        assert_eq!(order.effective_date(), placed);

        let delivered = Utc.with_ymd_and_hms(2025, 11, 14, 16, 0, 0).unwrap();
        order.date_delivery = Some(delivered);
        assert_eq!(order.effective_date(), delivered);
    }

    #[test]
    fn lenient_price_survives_garbage_json() {
        let json = r#"{
            "id": 9,
            "created_at": "2025-11-11T10:30:00Z",
            "order_number": "ORD-9",
            "order_status": "Pendente",
            "order_final_price": "abc",
            "order_quantity": 1,
            "date_order": null,
            "date_delivery": null,
            "client_name": "Maria",
            "client_phone": "(21) 98888-8888",
            "product_name": "Kit 5 Potes",
            "payment_status": "Pending",
            "cod_amount": "297.00"
        }"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_final_price, None);
        assert_eq!(order.cod_amount, Some(dec!(297.00)));
    }
}

//! Future delivery data model.
//!
//! Deliveries scheduled ahead of sale confirmation live in their own table
//! and are projected into the order shape at read time for display next to
//! real orders. The projection is one-way; nothing is written back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;
use super::order::{status, OrderRecord, PaymentStatus};

/// A scheduled future delivery.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FutureDeliveryRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub client_phone: String,
    pub product_name: String,
    pub quantity: i32,
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    /// Defaults to "Agendado" when unset
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FutureDeliveryRecord {
    /// Projects this record into the order shape for display.
    ///
    /// The projection is synthetic: order number `FUT-<id>`, zero price and
    /// commission, payment forced to Pending, and `date_order` stamped with
    /// the caller's clock. It is never persisted.
    #[must_use]
    pub fn as_order_view(&self, now: DateTime<Utc>) -> OrderRecord {
        OrderRecord {
            id: self.id,
            created_at: self.created_at,
            order_number: format!("FUT-{}", self.id),
            order_status: self
                .status
                .clone()
                .unwrap_or_else(|| status::SCHEDULED.to_string()),
            order_final_price: Some(Decimal::ZERO),
            order_quantity: self.quantity,
            date_order: Some(now),
            date_delivery: self.delivery_date,
            client_name: self.client_name.clone(),
            client_email: None,
            client_document: None,
            client_phone: self.client_phone.clone(),
            client_zip_code: None,
            client_address: None,
            client_address_number: None,
            client_address_district: None,
            client_address_city: None,
            client_address_state: None,
            client_address_comp: None,
            product_name: self.product_name.clone(),
            product_code: None,
            commission: Some(Decimal::ZERO),
            producer_commission: None,
            logistic_operator: None,
            delivery_man: None,
            payment_status: PaymentStatus::Pending.as_str().to_string(),
            cod_amount: self.cod_amount,
            notes: self.notes.clone(),
        }
    }
}

/// Payload for scheduling a future delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFutureDelivery {
    pub client_name: String,
    pub client_phone: String,
    pub product_name: String,
    pub quantity: i32,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a future delivery; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FutureDeliveryPatch {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cod_amount: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

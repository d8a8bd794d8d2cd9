//! Order repository.
//!
//! Provides list, insert, partial update, and delete over the orders table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use rota_ops_core::models::{status, NewOrder, OrderPatch, OrderRecord, PaymentStatus};

use crate::error::{StoreError, StoreResult};

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every order, most recently created first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> StoreResult<Vec<OrderRecord>> {
        let records = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, created_at, order_number, order_status, order_final_price,
                   order_quantity, date_order, date_delivery, client_name, client_email,
                   client_document, client_phone, client_zip_code, client_address,
                   client_address_number, client_address_district, client_address_city,
                   client_address_state, client_address_comp, product_name, product_code,
                   commission, producer_commission, logistic_operator, delivery_man,
                   payment_status, cod_amount, notes
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Returns orders placed inside the given range, newest first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<OrderRecord>> {
        let records = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, created_at, order_number, order_status, order_final_price,
                   order_quantity, date_order, date_delivery, client_name, client_email,
                   client_document, client_phone, client_zip_code, client_address,
                   client_address_number, client_address_district, client_address_city,
                   client_address_state, client_address_comp, product_name, product_code,
                   commission, producer_commission, logistic_operator, delivery_man,
                   payment_status, cod_amount, notes
            FROM orders
            WHERE date_order >= $1 AND date_order <= $2
            ORDER BY date_order DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Inserts a new order and returns the generated id.
    ///
    /// The order number is generated from the caller's clock
    /// (`ORD-<unix millis>`), which also stamps `created_at` and
    /// `date_order`.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, order: &NewOrder, now: DateTime<Utc>) -> StoreResult<i64> {
        let order_number = format!("ORD-{}", now.timestamp_millis());

        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO orders
                (created_at, order_number, order_status, order_final_price, order_quantity,
                 date_order, date_delivery, client_name, client_phone, client_address,
                 client_address_city, client_address_state, product_name, product_code,
                 commission, payment_status, cod_amount, logistic_operator, delivery_man, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING id
            "#,
        )
        .bind(now)
        .bind(&order_number)
        .bind(order.order_status.as_deref().unwrap_or(status::SCHEDULED))
        .bind(order.order_final_price)
        .bind(order.order_quantity)
        .bind(order.date_order.unwrap_or(now))
        .bind(order.date_delivery)
        .bind(&order.client_name)
        .bind(&order.client_phone)
        .bind(&order.client_address)
        .bind(&order.client_address_city)
        .bind(&order.client_address_state)
        .bind(&order.product_name)
        .bind(&order.product_code)
        .bind(order.commission)
        .bind(
            order
                .payment_status
                .as_deref()
                .unwrap_or(PaymentStatus::Pending.as_str()),
        )
        .bind(order.cod_amount)
        .bind(&order.logistic_operator)
        .bind(&order.delivery_man)
        .bind(&order.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    /// Applies a partial update; absent patch fields keep their stored value.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no order has this id, or a
    /// database error if the update fails.
    pub async fn update(&self, id: i64, patch: &OrderPatch) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                client_name = COALESCE($2, client_name),
                client_phone = COALESCE($3, client_phone),
                product_name = COALESCE($4, product_name),
                order_quantity = COALESCE($5, order_quantity),
                order_final_price = COALESCE($6, order_final_price),
                order_status = COALESCE($7, order_status),
                date_order = COALESCE($8, date_order),
                date_delivery = COALESCE($9, date_delivery),
                commission = COALESCE($10, commission),
                payment_status = COALESCE($11, payment_status),
                cod_amount = COALESCE($12, cod_amount),
                notes = COALESCE($13, notes)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.client_name)
        .bind(&patch.client_phone)
        .bind(&patch.product_name)
        .bind(patch.order_quantity)
        .bind(patch.order_final_price)
        .bind(&patch.order_status)
        .bind(patch.date_order)
        .bind(patch.date_delivery)
        .bind(patch.commission)
        .bind(&patch.payment_status)
        .bind(patch.cod_amount)
        .bind(&patch.notes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "order",
                id,
            });
        }
        Ok(())
    }

    /// Deletes an order.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no order has this id, or a
    /// database error if the delete fails.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "order",
                id,
            });
        }
        Ok(())
    }
}

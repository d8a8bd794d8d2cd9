//! Future delivery repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use rota_ops_core::models::{
    status, FutureDeliveryPatch, FutureDeliveryRecord, NewFutureDelivery,
};

use crate::error::{StoreError, StoreResult};

/// Repository for scheduled future deliveries.
#[derive(Debug, Clone)]
pub struct FutureDeliveryRepository {
    pool: PgPool,
}

impl FutureDeliveryRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every scheduled delivery, soonest first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> StoreResult<Vec<FutureDeliveryRecord>> {
        let records = sqlx::query_as::<_, FutureDeliveryRecord>(
            r#"
            SELECT id, created_at, client_name, client_phone, product_name,
                   quantity, delivery_date, cod_amount, status, notes
            FROM future_deliveries
            ORDER BY delivery_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Schedules a delivery and returns the stored row.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(
        &self,
        delivery: &NewFutureDelivery,
        now: DateTime<Utc>,
    ) -> StoreResult<FutureDeliveryRecord> {
        let record = sqlx::query_as::<_, FutureDeliveryRecord>(
            r#"
            INSERT INTO future_deliveries
                (created_at, client_name, client_phone, product_name, quantity,
                 delivery_date, cod_amount, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created_at, client_name, client_phone, product_name,
                      quantity, delivery_date, cod_amount, status, notes
            "#,
        )
        .bind(now)
        .bind(&delivery.client_name)
        .bind(&delivery.client_phone)
        .bind(&delivery.product_name)
        .bind(delivery.quantity)
        .bind(delivery.delivery_date)
        .bind(delivery.cod_amount)
        .bind(&delivery.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Applies a partial update; absent patch fields keep their stored value.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no delivery has this id, or a
    /// database error if the update fails.
    pub async fn update(&self, id: i64, patch: &FutureDeliveryPatch) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE future_deliveries SET
                client_name = COALESCE($2, client_name),
                client_phone = COALESCE($3, client_phone),
                product_name = COALESCE($4, product_name),
                quantity = COALESCE($5, quantity),
                delivery_date = COALESCE($6, delivery_date),
                cod_amount = COALESCE($7, cod_amount),
                notes = COALESCE($8, notes)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.client_name)
        .bind(&patch.client_phone)
        .bind(&patch.product_name)
        .bind(patch.quantity)
        .bind(patch.delivery_date)
        .bind(patch.cod_amount)
        .bind(&patch.notes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "future delivery",
                id,
            });
        }
        Ok(())
    }

    /// Overwrites the free-text notes of a delivery.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no delivery has this id, or a
    /// database error if the update fails.
    pub async fn set_notes(&self, id: i64, notes: &str) -> StoreResult<()> {
        let result = sqlx::query("UPDATE future_deliveries SET notes = $2 WHERE id = $1")
            .bind(id)
            .bind(notes)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "future delivery",
                id,
            });
        }
        Ok(())
    }

    /// Marks a delivery as completed.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no delivery has this id, or a
    /// database error if the update fails.
    pub async fn complete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("UPDATE future_deliveries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status::DELIVERED)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "future delivery",
                id,
            });
        }
        Ok(())
    }

    /// Removes a scheduled delivery.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no delivery has this id, or a
    /// database error if the delete fails.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM future_deliveries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "future delivery",
                id,
            });
        }
        Ok(())
    }
}

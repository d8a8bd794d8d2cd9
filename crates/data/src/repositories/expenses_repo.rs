//! Expense repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use rota_ops_core::models::{ExpenseRecord, NewExpense, OUTFLOW};

use crate::error::{StoreError, StoreResult};

/// Repository for logged expenses. Expenses are created and deleted, never
/// updated.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every expense, most recent first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> StoreResult<Vec<ExpenseRecord>> {
        let records = sqlx::query_as::<_, ExpenseRecord>(
            r#"
            SELECT id, created_at, description, amount, date, category, "type"
            FROM expenses
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Logs an expense and returns the generated id. The `type` column is
    /// always stamped with the outflow constant.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, expense: &NewExpense, now: DateTime<Utc>) -> StoreResult<i64> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO expenses (created_at, description, amount, category, date, "type")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(now)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(expense.date)
        .bind(OUTFLOW)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    /// Removes an expense.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no expense has this id, or a
    /// database error if the delete fails.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "expense",
                id,
            });
        }
        Ok(())
    }
}

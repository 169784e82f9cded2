//! Repository for the `expenses` table.

use finboard_core::expense::NewExpense;
use finboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::expense::Expense;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, amount, category, date, notes, created_at, updated_at";

/// Provides CRUD and analytics reads for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense, returning the created row.
    ///
    /// If `date` is `None` the row takes the insertion time.
    pub async fn create(pool: &PgPool, input: &NewExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (description, amount, category, date, notes)
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List expenses newest first, optionally restricted to one category
    /// (exact match).
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM expenses
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY date DESC, created_at DESC"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List expenses dated within `[start, end)`, in insertion order.
    pub async fn list_between(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM expenses
             WHERE date >= $1 AND date < $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// List every expense oldest first.
    pub async fn list_chronological(pool: &PgPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY date ASC, created_at ASC");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// Replace an expense's fields.
    ///
    /// A `None` date keeps the stored one; `notes` is always overwritten.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                description = $2,
                amount = $3,
                category = $4,
                date = COALESCE($5, date),
                notes = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

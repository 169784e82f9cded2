//! Repository for the `budgets` table.
//!
//! Inserting or renaming to a category that already has a budget fails with
//! a unique violation on `uq_budgets_category`, whatever the month.

use finboard_core::budget::NewBudget;
use finboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::Budget;

const COLUMNS: &str = "id, category, limit_amount, month, created_at, updated_at";

/// Provides create, list and replace for budgets. Budgets are never deleted.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a new budget, returning the created row.
    ///
    /// A `None` month falls back to the database's current month; callers
    /// normally resolve it first with `NewBudget::with_default_month`.
    pub async fn create(pool: &PgPool, input: &NewBudget) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets (category, limit_amount, month)
             VALUES ($1, $2, COALESCE($3, to_char(NOW(), 'YYYY-MM')))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(&input.category)
            .bind(input.limit)
            .bind(&input.month)
            .fetch_one(pool)
            .await
    }

    /// List all budgets ordered by category name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets ORDER BY category ASC");
        sqlx::query_as::<_, Budget>(&query).fetch_all(pool).await
    }

    /// Replace a budget's fields. A `None` month keeps the stored one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewBudget,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET
                category = $2,
                limit_amount = $3,
                month = COALESCE($4, month)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(input.limit)
            .bind(&input.month)
            .fetch_optional(pool)
            .await
    }
}

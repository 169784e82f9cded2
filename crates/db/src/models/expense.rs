//! Expense entity model.

use finboard_core::analytics::Spending;
use finboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Spending for Expense {
    fn category(&self) -> &str {
        &self.category
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> Timestamp {
        self.date
    }
}

//! Budget entity model.

use finboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `budgets` table.
///
/// `limit` is stored as `limit_amount` since `LIMIT` is reserved in SQL.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: DbId,
    pub category: String,
    #[sqlx(rename = "limit_amount")]
    pub limit: f64,
    pub month: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

//! Wire types as the dashboard sees them.
//!
//! These mirror the JSON the server emits. They do not depend on
//! the server's row types, so the client builds without a database driver.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub limit: f64,
    pub month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST`/`PUT /api/expenses`.
///
/// `date` is sent as the `YYYY-MM-DD` string the form holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST`/`PUT /api/budgets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub limit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

/// Current-month aggregate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub month: String,
    pub total: f64,
    pub transaction_count: u64,
    pub by_category: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryAmount {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

/// `{ "message": ... }` confirmation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub message: String,
}

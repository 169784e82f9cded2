//! Expense payloads and their validation.

use serde::Deserialize;

use crate::types::Timestamp;
use crate::validation::{deserialize_flexible_date, require_number, require_text, ValidationError};

/// Categories offered by the client. The server accepts any non-empty label.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Other",
];

/// Expense body as received on `POST /api/expenses` and `PUT /api/expenses/{id}`.
///
/// Every field is optional at this stage; [`ExpenseInput::validate`] decides
/// what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseInput {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_date")]
    pub date: Option<Timestamp>,
    pub notes: Option<String>,
}

/// A validated expense, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    /// `None` lets the store apply its default (creation time on insert,
    /// the stored date on replace).
    pub date: Option<Timestamp>,
    pub notes: Option<String>,
}

impl ExpenseInput {
    pub fn validate(self) -> Result<NewExpense, ValidationError> {
        let description = require_text("description", self.description)?;
        let amount = require_number("amount", self.amount)?;
        let category = require_text("category", self.category)?;

        Ok(NewExpense {
            description,
            amount,
            category,
            date: self.date,
            notes: self.notes.filter(|n| !n.is_empty()),
        })
    }
}

//! Budget payloads and their validation.
//!
//! Budgets are unique per category across the whole collection, not per
//! `(category, month)`. The store enforces that with a unique constraint.

use serde::Deserialize;

use crate::analytics::is_month_key;
use crate::validation::{require_number, require_text, ValidationError};

/// Budget body as received on `POST /api/budgets` and `PUT /api/budgets/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetInput {
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub month: Option<String>,
}

/// A validated budget, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: String,
    pub limit: f64,
    /// `YYYY-MM`. `None` means "use the default": the current month on
    /// insert, the stored month on replace.
    pub month: Option<String>,
}

impl BudgetInput {
    pub fn validate(self) -> Result<NewBudget, ValidationError> {
        let category = require_text("category", self.category)?;
        let limit = require_number("limit", self.limit)?;

        let month = match self.month {
            Some(m) if m.is_empty() => None,
            Some(m) if !is_month_key(&m) => return Err(ValidationError::InvalidMonth(m)),
            other => other,
        };

        Ok(NewBudget {
            category,
            limit,
            month,
        })
    }
}

impl NewBudget {
    /// Fill in the month if the payload left it out.
    pub fn with_default_month(mut self, month: impl FnOnce() -> String) -> Self {
        if self.month.is_none() {
            self.month = Some(month());
        }
        self
    }
}

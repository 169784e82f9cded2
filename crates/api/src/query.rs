//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/expenses`.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseListParams {
    /// Exact-match category filter. An empty value means no filter.
    pub category: Option<String>,
}

impl ExpenseListParams {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

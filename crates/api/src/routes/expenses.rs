//! Route definitions for expenses.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::expenses;
use crate::state::AppState;

/// Expense routes mounted at `/expenses`.
///
/// ```text
/// GET    /          -> list_expenses
/// POST   /          -> create_expense
/// PUT    /{id}      -> update_expense
/// DELETE /{id}      -> delete_expense
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/{id}",
            put(expenses::update_expense).delete(expenses::delete_expense),
        )
}

//! Route definitions for budgets.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::budgets;
use crate::state::AppState;

/// Budget routes mounted at `/budgets`.
///
/// ```text
/// GET    /          -> list_budgets
/// POST   /          -> create_budget
/// PUT    /{id}      -> update_budget
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(budgets::list_budgets).post(budgets::create_budget))
        .route("/{id}", put(budgets::update_budget))
}

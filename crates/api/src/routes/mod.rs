pub mod analytics;
pub mod budgets;
pub mod expenses;
pub mod service;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /expenses                     list (?category=), create
/// /expenses/{id}                replace, delete
///
/// /budgets                      list, create
/// /budgets/{id}                 replace (budgets have no delete)
///
/// /analytics/summary            current-month totals
/// /analytics/by-category        current-month {name, value} pairs
/// /analytics/monthly-trend      {month, amount} across all expenses
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/expenses", expenses::router())
        .nest("/budgets", budgets::router())
        .nest("/analytics", analytics::router())
}

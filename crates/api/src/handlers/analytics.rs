//! Handlers for the derived analytics views.
//!
//! Every request recomputes from the store. "Current month" is the server's
//! local calendar month at request time.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use finboard_core::analytics::{
    self, category_breakdown, month_window, summarize, CategoryAmount, MonthSummary,
    MonthlyAmount,
};
use finboard_db::repositories::ExpenseRepo;
use finboard_db::DbPool;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/analytics/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<MonthSummary>> {
    let summary = current_month_summary(&state.pool).await?;

    Ok(Json(summary))
}

/// GET /api/analytics/by-category
///
/// The summary's breakdown as `{name, value}` pairs in first-encounter order.
pub async fn by_category(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryAmount>>> {
    let summary = current_month_summary(&state.pool).await?;

    Ok(Json(category_breakdown(&summary)))
}

/// GET /api/analytics/monthly-trend
///
/// Per-month totals across every expense, oldest month first.
pub async fn monthly_trend(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MonthlyAmount>>> {
    let expenses = ExpenseRepo::list_chronological(&state.pool).await?;

    Ok(Json(analytics::monthly_trend(&expenses, &Local)))
}

async fn current_month_summary(pool: &DbPool) -> AppResult<MonthSummary> {
    let window = month_window(&Local::now())?;
    let expenses = ExpenseRepo::list_between(pool, window.start, window.end).await?;

    tracing::debug!(month = %window.key, count = expenses.len(), "Summarizing month");

    Ok(summarize(&window.key, &expenses))
}

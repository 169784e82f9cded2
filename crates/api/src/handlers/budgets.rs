//! Handlers for the `/api/budgets` resource.
//!
//! Budgets can be listed, created and replaced; there is no delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use finboard_core::analytics::month_key;
use finboard_core::budget::BudgetInput;
use finboard_core::error::CoreError;
use finboard_core::types::parse_id;
use finboard_db::repositories::BudgetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/budgets
///
/// List all budgets ordered by category.
pub async fn list_budgets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let budgets = BudgetRepo::list(&state.pool).await?;

    Ok(Json(budgets))
}

/// POST /api/budgets
///
/// Fails with 400 if a budget already exists for the category, in any month.
pub async fn create_budget(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BudgetInput>,
) -> AppResult<impl IntoResponse> {
    let new_budget = input
        .validate()?
        .with_default_month(|| month_key(&chrono::Local::now()));
    let budget = BudgetRepo::create(&state.pool, &new_budget).await?;

    tracing::info!(
        budget_id = %budget.id,
        category = %budget.category,
        month = %budget.month,
        "Budget created",
    );

    Ok((StatusCode::CREATED, Json(budget)))
}

/// PUT /api/budgets/{id}
///
/// Replace a budget. An omitted `month` keeps the stored one.
pub async fn update_budget(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<BudgetInput>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let new_budget = input.validate()?;

    let budget = BudgetRepo::replace(&state.pool, id, &new_budget)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))?;

    tracing::info!(budget_id = %id, "Budget updated");

    Ok(Json(budget))
}

//! Handlers for the `/api/expenses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use finboard_core::error::CoreError;
use finboard_core::expense::ExpenseInput;
use finboard_core::types::parse_id;
use finboard_db::repositories::ExpenseRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::query::ExpenseListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/expenses
///
/// List all expenses newest first, optionally filtered by `?category=`.
pub async fn list_expenses(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ExpenseListParams>,
) -> AppResult<impl IntoResponse> {
    let expenses = ExpenseRepo::list(&state.pool, params.category()).await?;

    Ok(Json(expenses))
}

/// POST /api/expenses
pub async fn create_expense(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> AppResult<impl IntoResponse> {
    let new_expense = input.validate()?;
    let expense = ExpenseRepo::create(&state.pool, &new_expense).await?;

    tracing::info!(
        expense_id = %expense.id,
        category = %expense.category,
        amount = expense.amount,
        "Expense created",
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/{id}
///
/// Replace every field of an expense. The body is validated as a complete
/// record; an omitted `date` keeps the stored one.
pub async fn update_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let new_expense = input.validate()?;

    let expense = ExpenseRepo::replace(&state.pool, id, &new_expense)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;

    tracing::info!(expense_id = %id, "Expense updated");

    Ok(Json(expense))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;

    if !ExpenseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }));
    }

    tracing::info!(expense_id = %id, "Expense deleted");

    Ok(Json(MessageResponse {
        message: "Expense deleted",
    }))
}

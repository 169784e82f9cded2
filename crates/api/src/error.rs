use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use finboard_core::error::CoreError;
use finboard_core::validation::ValidationError;
use serde_json::json;

/// Error type returned by every handler.
///
/// Rendered as `{ "error": "<message>" }`. There is no machine-readable code;
/// the status carries the category and the message is the underlying text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Rejected before reaching validation, e.g. a body that is not JSON or a
    /// query string that does not parse.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Map a sqlx error onto a status and message.
///
/// Unique (`23505`) and check (`23514`) violations are the client's fault,
/// such as a second budget for a category, and become 400. `RowNotFound`
/// becomes 404. Anything else is a 500 carrying the driver's text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
            ),
            Some("23514") => (StatusCode::BAD_REQUEST, db_err.message().to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, db_err.message().to_string()),
        },
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

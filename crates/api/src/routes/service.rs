//! Root-level routes, outside `/api`.

use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// ```text
/// GET /          -> banner
/// GET /health    -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::banner))
        .route("/health", get(service::health))
}

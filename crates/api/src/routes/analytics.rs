use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes mounted at `/analytics`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(analytics::summary))
        .route("/by-category", get(analytics::by_category))
        .route("/monthly-trend", get(analytics::monthly_trend))
}

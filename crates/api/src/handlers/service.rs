//! Service banner and liveness check.

use axum::extract::State;
use axum::Json;

use crate::response::{HealthReport, ServiceBanner};
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /
pub async fn banner() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "Finance Dashboard API",
        version: VERSION,
    })
}

/// GET /health
///
/// Always 200; a failed database ping reports `"degraded"`.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match finboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: VERSION,
        db_healthy,
    })
}

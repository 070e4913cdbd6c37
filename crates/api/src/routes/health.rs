//! `/health`: liveness plus database and schema readiness for the movies store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database or schema is not usable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest applied migration, `null` if none ran or the DB is unreachable.
    pub schema_version: Option<i64>,
    /// The `movies` and `genres` tables exist.
    pub schema_ready: bool,
}

/// Answers 200 when the store can serve requests, 503 otherwise. The body is
/// the same shape in both cases.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let schema = match movies_db::schema_status(&state.pool).await {
        Ok(schema) => Some(schema),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            None
        }
    };

    let db_healthy = schema.is_some();
    let schema_ready = schema.is_some_and(|s| s.tables_ready);
    let (code, status) = if schema_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version: schema.and_then(|s| s.migration_version),
        schema_ready,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

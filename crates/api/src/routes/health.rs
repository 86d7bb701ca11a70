//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use gamebase_db::repositories::GameRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the games table cannot be read.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Rows in `games`; `null` while the database is unreachable.
    pub games: Option<i64>,
}

/// GET /health
///
/// Counting `games` doubles as the database check: it needs a connection
/// and a migrated schema.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let games = match GameRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not count games");
            None
        }
    };

    let db_healthy = games.is_some();
    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        games,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

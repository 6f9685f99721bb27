//! Operational routes: liveness, readiness (database round trip plus pool occupancy), build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct PoolStats {
    size: u32,
    idle: usize,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    pool: PoolStats,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// 503 when the pool cannot run `SELECT 1`; the pool figures are reported either way.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let reachable = match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            false
        }
    };
    let pool = PoolStats {
        size: state.pool.size(),
        idle: state.pool.num_idle(),
    };
    let (status, body) = if reachable {
        (StatusCode::OK, ReadyBody { status: "ok", database: "ok", pool })
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadyBody { status: "degraded", database: "unavailable", pool },
        )
    };
    (status, Json(body))
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

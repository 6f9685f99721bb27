//! Shared application state for all routes.

use sqlx::PgPool;

/// Handed to every handler through axum's `State` extractor; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}

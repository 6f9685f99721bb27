use crate::handlers::invoices::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/invoices", get(list).post(create))
        .route("/invoices/:id", get(read).put(update).delete(delete))
        .with_state(state)
}

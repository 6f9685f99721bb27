//! Routers for the two resources and the common endpoints.

mod common;
mod companies;
mod invoices;

pub use common::common_routes;
pub use companies::company_routes;
pub use invoices::invoice_routes;

use crate::config::DEFAULT_BODY_LIMIT_BYTES;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with the default body limit.
pub fn app(state: AppState) -> Router {
    app_with_body_limit(state, DEFAULT_BODY_LIMIT_BYTES)
}

pub fn app_with_body_limit(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(company_routes(state.clone()))
        .merge(invoice_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

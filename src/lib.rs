//! biztime: REST backend for companies and their invoices on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod slug;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::derive_paid_date;
pub use routes::{app, app_with_body_limit, common_routes, company_routes, invoice_routes};
pub use service::{CompanyService, InvoiceService};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};

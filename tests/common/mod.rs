//! Shared helpers for router and database tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use biztime::{app, apply_migrations, AppState};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

/// Database tests share one schema; they take this lock so seeding never interleaves.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Router over a pool that never connects (nothing listens on port 1).
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://127.0.0.1:1/biztime_offline")
        .expect("lazy pool");
    app(AppState::new(pool))
}

pub struct TestDb {
    pub pool: PgPool,
    pub app: Router,
    _guard: MutexGuard<'static, ()>,
}

/// Connect to `TEST_DATABASE_URL`, migrate and reseed. None (test skipped) when unset.
pub async fn seeded_db() -> Option<TestDb> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return None;
    };
    let guard = DB_LOCK.lock().await;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    apply_migrations(&pool).await.expect("migrations");
    seed(&pool).await;
    Some(TestDb {
        app: app(AppState::new(pool.clone())),
        pool,
        _guard: guard,
    })
}

/// One company (apple) owning invoices 1 (200) and 2 (300), both unpaid.
async fn seed(pool: &PgPool) {
    for sql in [
        "DELETE FROM invoices",
        "DELETE FROM companies",
        "SELECT setval('invoices_id_seq', 1, false)",
        "INSERT INTO companies (code, name, description) VALUES ('apple', 'Apple', 'Maker of OSX')",
        "INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date) VALUES \
         ('apple', 200, false, '2019-02-02', null), \
         ('apple', 300, false, '2020-03-03', null)",
    ] {
        sqlx::query(sql).execute(pool).await.expect(sql);
    }
}

/// Send a request through the router and decode the JSON body (Null when empty or not JSON).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send a raw body with an optional `Content-Type`, for requests `send` cannot express.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder.body(Body::from(body.to_string())).expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

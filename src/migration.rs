//! Schema DDL for the two resource tables. Idempotent; run once at startup.
//! `invoices.comp_code` references `companies.code` with the default NO ACTION,
//! so deleting a company that still owns invoices fails instead of cascading.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id SERIAL PRIMARY KEY,
        comp_code TEXT NOT NULL REFERENCES companies (code),
        amt DOUBLE PRECISION NOT NULL CHECK (amt > 0),
        paid BOOLEAN NOT NULL DEFAULT FALSE,
        add_date DATE NOT NULL DEFAULT CURRENT_DATE,
        paid_date DATE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS invoices_comp_code_idx ON invoices (comp_code)",
];

/// Create `companies` and `invoices` (and the comp_code index) if they do not exist.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for sql in DDL {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(statements = DDL.len(), "schema ready");
    Ok(())
}

//! Invoice queries against PostgreSQL.

use crate::error::AppError;
use crate::models::{derive_paid_date, Company, Invoice, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewInvoice};
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

const LIST_SQL: &str = "SELECT id, comp_code FROM invoices ORDER BY id";
const READ_SQL: &str = "SELECT i.id, i.amt, i.paid, i.add_date, i.paid_date, c.code, c.name, c.description \
     FROM invoices i INNER JOIN companies c ON i.comp_code = c.code WHERE i.id = $1";
const INSERT_SQL: &str = "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) \
     RETURNING id, comp_code, amt, paid, add_date, paid_date";
const LOCK_SQL: &str = "SELECT paid_date, CURRENT_DATE FROM invoices WHERE id = $1 FOR UPDATE";
const UPDATE_SQL: &str = "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3 WHERE id = $4 \
     RETURNING id, comp_code, amt, paid, add_date, paid_date";
const DELETE_SQL: &str = "DELETE FROM invoices WHERE id = $1 RETURNING id";

#[derive(FromRow)]
struct InvoiceCompanyRow {
    id: i32,
    amt: f64,
    paid: bool,
    add_date: NaiveDate,
    paid_date: Option<NaiveDate>,
    code: String,
    name: String,
    description: Option<String>,
}

impl From<InvoiceCompanyRow> for InvoiceDetail {
    fn from(r: InvoiceCompanyRow) -> Self {
        InvoiceDetail {
            id: r.id,
            amt: r.amt,
            paid: r.paid,
            add_date: r.add_date,
            paid_date: r.paid_date,
            company: Company {
                code: r.code,
                name: r.name,
                description: r.description,
            },
        }
    }
}

pub struct InvoiceService;

impl InvoiceService {
    pub async fn list(pool: &PgPool) -> Result<Vec<InvoiceSummary>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows = sqlx::query_as::<_, InvoiceSummary>(LIST_SQL)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Invoice joined with its company.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<InvoiceDetail>, AppError> {
        tracing::debug!(sql = %READ_SQL, id, "query");
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(READ_SQL)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(InvoiceDetail::from))
    }

    /// paid, add_date and paid_date come from column defaults.
    pub async fn create(pool: &PgPool, body: &NewInvoice) -> Result<Invoice, AppError> {
        tracing::debug!(sql = %INSERT_SQL, comp_code = %body.comp_code, "query");
        let row = sqlx::query_as::<_, Invoice>(INSERT_SQL)
            .bind(&body.comp_code)
            .bind(body.amt)
            .fetch_one(pool)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::ForeignKeyViolation(_) => {
                    AppError::ForeignKeyViolation(format!("no company with code '{}'", body.comp_code))
                }
                other => other,
            })?;
        Ok(row)
    }

    /// Update amt/paid and derive paid_date from the locked current row, in one transaction.
    /// None when the id does not exist.
    pub async fn update(pool: &PgPool, id: i32, body: &InvoiceUpdate) -> Result<Option<Invoice>, AppError> {
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = %LOCK_SQL, id, "query (tx)");
        let current: Option<(Option<NaiveDate>, NaiveDate)> = sqlx::query_as(LOCK_SQL)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((previous, today)) = current else {
            return Ok(None);
        };
        let paid_date = derive_paid_date(previous, body.paid, today);
        tracing::debug!(sql = %UPDATE_SQL, id, paid = body.paid, paid_date = ?paid_date, "query (tx)");
        let row = sqlx::query_as::<_, Invoice>(UPDATE_SQL)
            .bind(body.amt)
            .bind(body.paid)
            .bind(paid_date)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Returns the deleted id, or None when nothing matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<i32>, AppError> {
        tracing::debug!(sql = %DELETE_SQL, id, "query");
        let deleted: Option<i32> = sqlx::query_scalar(DELETE_SQL)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted)
    }
}

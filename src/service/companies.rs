//! Company queries against PostgreSQL.

use crate::error::AppError;
use crate::models::{Company, CompanyDetail, CompanyPayload, CompanySummary};
use crate::slug::slugify;
use sqlx::PgPool;

const LIST_SQL: &str = "SELECT code, name FROM companies ORDER BY code";
const READ_SQL: &str = "SELECT code, name, description FROM companies WHERE code = $1";
const INVOICE_IDS_SQL: &str = "SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id";
const INSERT_SQL: &str =
    "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) RETURNING code, name, description";
const UPDATE_SQL: &str =
    "UPDATE companies SET name = $1, description = $2 WHERE code = $3 RETURNING code, name, description";
const DELETE_SQL: &str = "DELETE FROM companies WHERE code = $1 RETURNING code";

pub struct CompanyService;

impl CompanyService {
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanySummary>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows = sqlx::query_as::<_, CompanySummary>(LIST_SQL)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Company by code with the ids of its invoices. None when no company has that code.
    pub async fn read(pool: &PgPool, code: &str) -> Result<Option<CompanyDetail>, AppError> {
        tracing::debug!(sql = %READ_SQL, code = %code, "query");
        let Some(company) = sqlx::query_as::<_, Company>(READ_SQL)
            .bind(code)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        tracing::debug!(sql = %INVOICE_IDS_SQL, code = %code, "query");
        let invoices: Vec<i32> = sqlx::query_scalar(INVOICE_IDS_SQL)
            .bind(code)
            .fetch_all(pool)
            .await?;
        Ok(Some(CompanyDetail::new(company, invoices)))
    }

    /// Insert with code = slugify(name). A taken code comes back from the store as a unique violation.
    pub async fn create(pool: &PgPool, body: &CompanyPayload) -> Result<Company, AppError> {
        let code = slugify(&body.name);
        tracing::debug!(sql = %INSERT_SQL, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(INSERT_SQL)
            .bind(&code)
            .bind(&body.name)
            .bind(&body.description)
            .fetch_one(pool)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict(format!("company code '{}' already exists", code)),
                other => other,
            })?;
        Ok(row)
    }

    /// Replace name and description. The code never changes.
    pub async fn update(pool: &PgPool, code: &str, body: &CompanyPayload) -> Result<Option<Company>, AppError> {
        tracing::debug!(sql = %UPDATE_SQL, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(UPDATE_SQL)
            .bind(&body.name)
            .bind(&body.description)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Returns the deleted code, or None when nothing matched.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<Option<String>, AppError> {
        tracing::debug!(sql = %DELETE_SQL, code = %code, "query");
        let deleted: Option<String> = sqlx::query_scalar(DELETE_SQL)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::ForeignKeyViolation(_) => {
                    AppError::ForeignKeyViolation(format!("company '{}' still has invoices", code))
                }
                other => other,
            })?;
        Ok(deleted)
    }
}

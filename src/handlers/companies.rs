//! Company handlers: list, read (with invoice ids), create, update, delete.

use super::parse_body;
use crate::error::AppError;
use crate::models::CompanyPayload;
use crate::response;
use crate::service::{CompanyService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CompanyService::list(&state.pool).await?;
    Ok(response::companies(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::read(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company with code '{}'", code)))?;
    Ok(response::company_detail(company))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body: CompanyPayload = parse_body(body)?;
    RequestValidator::new_company(&body)?;
    let company = CompanyService::create(&state.pool, &body).await?;
    tracing::info!(code = %company.code, "company created");
    Ok(response::company_created(company))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body: CompanyPayload = parse_body(body)?;
    RequestValidator::company(&body)?;
    let company = CompanyService::update(&state.pool, &code, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company with code '{}'", code)))?;
    tracing::info!(code = %company.code, "company updated");
    Ok(response::company_ok(company))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CompanyService::delete(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company with code '{}'", code)))?;
    tracing::info!(code = %code, "company deleted");
    Ok(response::deleted())
}

//! Invoice handlers: list, read (joined with company), create, update (paid-date derivation), delete.

use super::{parse_body, parse_id};
use crate::error::AppError;
use crate::models::{InvoiceUpdate, NewInvoice};
use crate::response;
use crate::service::{InvoiceService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = InvoiceService::list(&state.pool).await?;
    Ok(response::invoices(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let invoice = InvoiceService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    Ok(response::invoice_detail(invoice))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body: NewInvoice = parse_body(body)?;
    RequestValidator::new_invoice(&body)?;
    let invoice = InvoiceService::create(&state.pool, &body).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok(response::invoice_created(invoice))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let body: InvoiceUpdate = parse_body(body)?;
    RequestValidator::invoice_update(&body)?;
    let invoice = InvoiceService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    tracing::info!(id, paid = invoice.paid, "invoice updated");
    Ok(response::invoice_ok(invoice))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    InvoiceService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    tracing::info!(id, "invoice deleted");
    Ok(response::deleted())
}

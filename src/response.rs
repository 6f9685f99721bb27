//! Response envelopes. Every body wraps its payload under a resource key.

use crate::models::{Company, CompanyDetail, CompanySummary, Invoice, InvoiceDetail, InvoiceSummary};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CompaniesBody {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyBody<T> {
    pub company: T,
}

#[derive(Serialize)]
pub struct InvoicesBody {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
pub struct InvoiceBody {
    pub invoice: Invoice,
}

/// `GET /invoices/:id` keeps the capitalised key clients already read.
#[derive(Serialize)]
pub struct InvoiceDetailBody {
    #[serde(rename = "Invoice")]
    pub invoice: InvoiceDetail,
}

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub fn companies(companies: Vec<CompanySummary>) -> (StatusCode, Json<CompaniesBody>) {
    (StatusCode::OK, Json(CompaniesBody { companies }))
}

pub fn company_detail(company: CompanyDetail) -> (StatusCode, Json<CompanyBody<CompanyDetail>>) {
    (StatusCode::OK, Json(CompanyBody { company }))
}

pub fn company_created(company: Company) -> (StatusCode, Json<CompanyBody<Company>>) {
    (StatusCode::CREATED, Json(CompanyBody { company }))
}

pub fn company_ok(company: Company) -> (StatusCode, Json<CompanyBody<Company>>) {
    (StatusCode::OK, Json(CompanyBody { company }))
}

pub fn invoices(invoices: Vec<InvoiceSummary>) -> (StatusCode, Json<InvoicesBody>) {
    (StatusCode::OK, Json(InvoicesBody { invoices }))
}

pub fn invoice_detail(invoice: InvoiceDetail) -> (StatusCode, Json<InvoiceDetailBody>) {
    (StatusCode::OK, Json(InvoiceDetailBody { invoice }))
}

pub fn invoice_created(invoice: Invoice) -> (StatusCode, Json<InvoiceBody>) {
    (StatusCode::CREATED, Json(InvoiceBody { invoice }))
}

pub fn invoice_ok(invoice: Invoice) -> (StatusCode, Json<InvoiceBody>) {
    (StatusCode::OK, Json(InvoiceBody { invoice }))
}

pub fn deleted() -> (StatusCode, Json<StatusBody>) {
    (StatusCode::OK, Json(StatusBody { status: "deleted" }))
}

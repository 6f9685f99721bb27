//! Resource services: SQL execution for companies and invoices, plus payload validation.

mod companies;
mod invoices;
mod validation;
pub use companies::CompanyService;
pub use invoices::InvoiceService;
pub use validation::RequestValidator;

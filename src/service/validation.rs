//! Request payload validation.

use crate::error::AppError;
use crate::models::{CompanyPayload, InvoiceUpdate, NewInvoice};
use crate::slug::slugify;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

pub struct RequestValidator;

impl RequestValidator {
    /// New company: the name must also slugify to a non-empty code.
    pub fn new_company(body: &CompanyPayload) -> Result<(), AppError> {
        Self::company(body)?;
        if slugify(&body.name).is_empty() {
            return Err(AppError::Validation(
                "name must contain at least one letter or digit".into(),
            ));
        }
        Ok(())
    }

    /// Name present and bounded, description bounded. Used as-is for updates, which keep the code.
    pub fn company(body: &CompanyPayload) -> Result<(), AppError> {
        validate_text("name", &body.name, MAX_NAME_LENGTH)?;
        if let Some(d) = &body.description {
            if d.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Err(AppError::Validation(format!(
                    "description must be at most {} characters",
                    MAX_DESCRIPTION_LENGTH
                )));
            }
        }
        Ok(())
    }

    pub fn new_invoice(body: &NewInvoice) -> Result<(), AppError> {
        validate_text("comp_code", &body.comp_code, MAX_NAME_LENGTH)?;
        validate_amount(body.amt)
    }

    pub fn invoice_update(body: &InvoiceUpdate) -> Result<(), AppError> {
        validate_amount(body.amt)
    }
}

fn validate_text(col: &str, v: &str, max: usize) -> Result<(), AppError> {
    if v.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    if v.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, max
        )));
    }
    Ok(())
}

fn validate_amount(amt: f64) -> Result<(), AppError> {
    if !amt.is_finite() || amt <= 0.0 {
        return Err(AppError::Validation(format!("amt must be a positive number, got {}", amt)));
    }
    Ok(())
}

//! HTTP handlers for the company and invoice resources.

pub mod companies;
pub mod invoices;

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize a JSON body into its payload type. Rejected bodies and anything but an object
/// are bad requests.
fn parse_body<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> Result<T, AppError> {
    let Json(value) = body?;
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid invoice id '{}'", id_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceUpdate, NewInvoice};
    use serde_json::json;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(parse_id("99999999999").is_err());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = parse_body::<NewInvoice>(Ok(Json(json!([1, 2])))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "body must be a JSON object"));
    }

    #[test]
    fn missing_field_is_bad_request() {
        let err = parse_body::<InvoiceUpdate>(Ok(Json(json!({"amt": 5555})))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m.contains("paid")));
    }
}

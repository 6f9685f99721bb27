//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Constraint violations reported by PostgreSQL get their own variants so callers
/// see 409/422 instead of a generic database failure.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let kind = match &e {
            sqlx::Error::Database(db) => Some((db.kind(), db.message().to_string())),
            _ => None,
        };
        match kind {
            Some((ErrorKind::UniqueViolation, msg)) => AppError::Conflict(msg),
            Some((ErrorKind::ForeignKeyViolation, msg)) => AppError::ForeignKeyViolation(msg),
            Some((ErrorKind::CheckViolation, msg)) | Some((ErrorKind::NotNullViolation, msg)) => {
                AppError::Validation(msg)
            }
            _ => AppError::Db(e),
        }
    }
}

/// Unparseable bodies and missing `Content-Type` headers answer with the same JSON error body
/// as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Conflict(_) | AppError::ForeignKeyViolation(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Db(sqlx::Error::RowNotFound) => "not_found",
            AppError::Db(_) => "database_error",
            AppError::Conflict(_) => "conflict",
            AppError::ForeignKeyViolation(_) => "foreign_key_violation",
            AppError::BadRequest(_) => "bad_request",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("company apple".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn constraint_errors_map_to_409() {
        assert_eq!(AppError::Conflict("dup".into()).status_code(), StatusCode::CONFLICT);
        let fk = AppError::ForeignKeyViolation("invoices_comp_code_fkey".into());
        assert_eq!(fk.status_code(), StatusCode::CONFLICT);
        assert_eq!(fk.code(), "foreign_key_violation");
    }

    #[test]
    fn row_not_found_is_404_other_db_errors_are_500() {
        assert_eq!(AppError::from(sqlx::Error::RowNotFound).status_code(), StatusCode::NOT_FOUND);
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "database_error");
    }

    #[tokio::test]
    async fn error_body_carries_code_and_message() {
        let resp = AppError::BadRequest("body must be a JSON object".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "bad_request");
        assert_eq!(body["error"]["message"], "bad request: body must be a JSON object");
    }
}

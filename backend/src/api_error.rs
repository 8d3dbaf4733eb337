//! # API Error Handling
//!
//! Every handler returns `Result<HttpResponse, ApiError>`. The error type decides the
//! status code and the JSON body, so handlers only need `?`.
//!
//! - `Validation`: 400 with `{ "errors": { field: reason } }`.
//! - `BadRequest`: 400 with `{ "error", "details" }` (unreadable JSON, missing species).
//! - `NotFound`: 404 with `{ "error" }`.
//! - `Internal`: 500 with `{ "error": "Internal server error", "details" }`. These are
//!   the only failures written to the error log, by `failure_log`.

use crate::model::ValidationErrors;
use crate::store::StoreError;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, HttpResponse, ResponseError};
use common::responses::{ErrorResponse, ValidationErrorResponse};
use log::error;
use thiserror::Error;

pub const MONKEY_NOT_FOUND: &str = "Monkey not found";
const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(ValidationErrors),
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<String>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    pub fn route_not_found(path: &str) -> Self {
        ApiError::NotFound(format!("Route {} not found", path))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound(MONKEY_NOT_FOUND.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(errors) => response.json(ValidationErrorResponse {
                errors: errors.to_map(),
            }),
            ApiError::BadRequest { message, details } => response.json(ErrorResponse {
                error: message.clone(),
                details: details.clone(),
            }),
            ApiError::NotFound(message) => response.json(ErrorResponse {
                error: message.clone(),
                details: None,
            }),
            ApiError::Internal(details) => response.json(ErrorResponse {
                error: INTERNAL_SERVER_ERROR.to_string(),
                details: Some(details.clone()),
            }),
        }
    }
}

/// JSON extractor settings. Bodies are parsed whatever their `Content-Type`, and
/// unreadable ones become a 400 `ApiError` instead of Actix's plain-text default.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            ApiError::BadRequest {
                message: "Invalid JSON body".to_string(),
                details: Some(err.to_string()),
            }
            .into()
        })
}

/// Middleware that logs every 500 with the request line that caused it.
pub fn failure_log<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, log_internal_error)
}

fn log_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let detail = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_default();
    error!(
        "request failed method={} path={} error={}",
        res.request().method(),
        res.request().path(),
        detail
    );
    Ok(ErrorHandlerResponse::Response(res.map_into_left_body()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn store_not_found_becomes_404() {
        let err = ApiError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], MONKEY_NOT_FOUND);
    }

    #[actix_web::test]
    async fn internal_error_keeps_details() {
        let err = ApiError::from(StoreError::Poisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "database connection lock poisoned");
    }
}

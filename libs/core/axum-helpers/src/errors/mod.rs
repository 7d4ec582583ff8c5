pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{BytesRejection, FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error body returned by every JSON endpoint.
///
/// ```json
/// { "ok": false, "error": "Deporte no encontrado" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub ok: bool,
    /// Human-readable message, safe to show to end users
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Storage failures carry the underlying error only for logging; the client
/// receives `message` and nothing else.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Form extraction error: {0}")]
    FormExtractorRejection(#[from] FormRejection),

    #[error("Failed to read request body: {0}")]
    BodyRejection(#[from] BytesRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("{message}: {source}")]
    Storage {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AppError {
    pub fn storage(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text())
            }
            AppError::FormExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "Form extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text())
            }
            AppError::BodyRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "Request body error: {:?}",
                    e
                );
                (e.status(), e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (StatusCode::BAD_REQUEST, validation_message(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Storage { message, source } => {
                tracing::error!(
                    error_code = ErrorCode::Storage.code(),
                    error = %source,
                    "{}",
                    message
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// First message attached to a failed validation rule, or the generic one.
///
/// Request schemas give every rule of a struct the same message, so the
/// choice of field does not change what the client sees.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    field_errors
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| messages::VALIDATION_FAILED.to_string())
}

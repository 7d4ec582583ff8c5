use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

use crate::messages;

/// Failures of the backing file. `Read`/`Decode` come from `load`,
/// `Encode`/`Write` from `save`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed data in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize collection: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum DeporteError {
    #[error("Invalid input: {0}")]
    Validation(&'static str),

    #[error("Deporte '{0}' not found")]
    NotFound(String),

    /// `message` is the per-operation text shown to the client
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

pub type DeporteResult<T> = Result<T, DeporteError>;

/// Attaches the per-operation client message to a storage failure.
pub(crate) trait StorageContext<T> {
    fn or_fail_with(self, message: &'static str) -> DeporteResult<T>;
}

impl<T> StorageContext<T> for StoreResult<T> {
    fn or_fail_with(self, message: &'static str) -> DeporteResult<T> {
        self.map_err(|source| DeporteError::Storage { message, source })
    }
}

/// Convert DeporteError to AppError for standardized error responses
impl From<DeporteError> for AppError {
    fn from(err: DeporteError) -> Self {
        match err {
            DeporteError::Validation(msg) => AppError::BadRequest(msg.to_string()),
            DeporteError::NotFound(_) => AppError::NotFound(messages::NOT_FOUND.to_string()),
            DeporteError::Storage { message, source } => AppError::storage(message, source),
        }
    }
}

impl IntoResponse for DeporteError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn read_error() -> StoreError {
        StoreError::Read {
            path: PathBuf::from("db/deportes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                DeporteError::Validation(messages::NEW_PRICE_REQUIRED),
                StatusCode::BAD_REQUEST,
            ),
            (DeporteError::NotFound("golf".into()), StatusCode::NOT_FOUND),
            (
                DeporteError::Storage {
                    message: messages::READ_FAILED,
                    source: read_error(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_or_fail_with_keeps_source() {
        let result: StoreResult<()> = Err(read_error());
        let err = result.or_fail_with(messages::DELETE_FAILED).unwrap_err();

        assert!(matches!(
            err,
            DeporteError::Storage {
                message: messages::DELETE_FAILED,
                source: StoreError::Read { .. }
            }
        ));
        assert!(err.to_string().starts_with("Error al borrar el deporte"));
    }
}

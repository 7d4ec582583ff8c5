//! Type-safe error codes attached to error logs.
//!
//! Clients only ever see `{ "ok": false, "error": "<message>" }`; the codes
//! below exist so log aggregation can group failures without parsing the
//! (localized) messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::Storage;
//! assert_eq!(code.as_str(), "STORAGE_ERROR");
//! assert_eq!(code.code(), 4001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Required request field missing or falsy
    ValidationError,

    /// Request body could not be read or parsed (JSON or form)
    JsonExtraction,

    /// No item matched the requested name
    NotFound,

    // Server errors (4000-4999)
    /// Backing file could not be read, parsed, or written
    #[serde(rename = "STORAGE_ERROR")]
    Storage,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier used in structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Storage => "STORAGE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 4000-4999: Storage errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::Storage => 4001,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::messages::SITE_NOT_FOUND;

/// Catch-all for unmatched paths and unmatched methods on known paths.
///
/// Registered both as the router fallback and as the method-not-allowed
/// fallback, so `PATCH /deportes` answers exactly like `GET /nope`.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, SITE_NOT_FOUND).into_response()
}

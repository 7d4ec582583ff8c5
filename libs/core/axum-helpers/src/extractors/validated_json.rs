//! Request-body extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{Form, FromRequest, Json, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Request-body extractor with automatic validation.
///
/// - `application/json` bodies go through axum's `Json`
/// - `application/x-www-form-urlencoded` bodies go through axum's `Form`
/// - an empty body, or any other content type, is read as `T::default()`
///
/// The value is validated in every case, so a request without a body gets
/// the same 400 as one with the required fields missing. Parse failures keep
/// the status chosen by axum's rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Default, Deserialize, Validate)]
/// struct Rename {
///     #[validate(required(message = "name required"), length(min = 1, message = "name required"))]
///     name: Option<String>,
/// }
///
/// async fn rename(ValidatedJson(payload): ValidatedJson<Rename>) -> String {
///     format!("Renaming to {:?}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();

    if essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let data = match body_kind(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::from(e).into_response())?;
                if bytes.is_empty() {
                    T::default()
                } else {
                    let Json(data) = Json::<T>::from_bytes(&bytes)
                        .map_err(|e| AppError::from(e).into_response())?;
                    data
                }
            }
            BodyKind::Form => {
                let Form(data) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::from(e).into_response())?;
                data
            }
            BodyKind::Other => T::default(),
        };

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - storage could not be read or written",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "Error al leer los datos"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - required field missing",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "Nombre y precio son requeridos"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "error": "Deporte no encontrado"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

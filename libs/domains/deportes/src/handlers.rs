use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::DeporteResult;
use crate::models::{Acknowledgement, CreateDeporte, Deporte, UpdatePrice};
use crate::repository::DeporteRepository;
use crate::service::DeporteService;

/// OpenAPI documentation for the Deportes API
#[derive(OpenApi)]
#[openapi(
    paths(list_deportes, create_deporte, delete_deporte, update_price),
    components(
        schemas(Deporte, CreateDeporte, UpdatePrice, Acknowledgement),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Deportes", description = "Sports catalog backed by a JSON file")
    )
)]
pub struct ApiDoc;

/// Create the deportes router with all HTTP endpoints
///
/// Every path also matches with a single trailing slash.
pub fn router<R: DeporteRepository + 'static>(service: DeporteService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/deportes", get(list_deportes))
        .route("/deportes/", get(list_deportes))
        .route("/agregar", post(create_deporte))
        .route("/agregar/", post(create_deporte))
        .route("/borrar/{name}", delete(delete_deporte))
        .route("/borrar/{name}/", delete(delete_deporte))
        .route("/editar/{name}", put(update_price))
        .route("/editar/{name}/", put(update_price))
        .with_state(shared_service)
}

/// List the whole catalog
#[utoipa::path(
    get,
    path = "/deportes",
    tag = "Deportes",
    responses(
        (status = 200, description = "Every deporte, in insertion order", body = Vec<Deporte>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_deportes<R: DeporteRepository>(
    State(service): State<Arc<DeporteService<R>>>,
) -> DeporteResult<Json<Vec<Deporte>>> {
    let deportes = service.list_deportes().await?;
    Ok(Json(deportes))
}

/// Append a deporte to the catalog
#[utoipa::path(
    post,
    path = "/agregar",
    tag = "Deportes",
    request_body = CreateDeporte,
    responses(
        (status = 200, description = "Deporte created", body = Deporte),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_deporte<R: DeporteRepository>(
    State(service): State<Arc<DeporteService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateDeporte>,
) -> DeporteResult<Json<Deporte>> {
    let deporte = service.create_deporte(input).await?;
    Ok(Json(deporte))
}

/// Delete every deporte with the given name
#[utoipa::path(
    delete,
    path = "/borrar/{name}",
    tag = "Deportes",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive name")
    ),
    responses(
        (status = 200, description = "Deporte deleted", body = Acknowledgement),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_deporte<R: DeporteRepository>(
    State(service): State<Arc<DeporteService<R>>>,
    Path(name): Path<String>,
) -> DeporteResult<Json<Acknowledgement>> {
    service.delete_deporte(&name).await?;
    Ok(Json(Acknowledgement::ok()))
}

/// Change the price of the first deporte with the given name
#[utoipa::path(
    put,
    path = "/editar/{name}",
    tag = "Deportes",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive name")
    ),
    request_body = UpdatePrice,
    responses(
        (status = 200, description = "Price updated", body = Deporte),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_price<R: DeporteRepository>(
    State(service): State<Arc<DeporteService<R>>>,
    Path(name): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdatePrice>,
) -> DeporteResult<Json<Deporte>> {
    let deporte = service.update_price(&name, input).await?;
    Ok(Json(deporte))
}

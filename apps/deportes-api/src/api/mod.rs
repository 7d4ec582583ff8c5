//! API routes module
//!
//! This module defines all HTTP routes of the Deportes API.

pub mod deportes;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
/// Note: these are mounted at the root by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(deportes::router(state))
        .merge(health_router(state.config.app))
}

/// Full application: landing page, API routes, OpenAPI document and the
/// catch-all 404.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), &state.config.storage.index_file)
}

//! Deportes API routes
//!
//! This module wires up the deportes domain to HTTP routes.

use axum::Router;
use domain_deportes::{DeporteService, handlers};

use crate::state::AppState;

/// Create deportes router
pub fn router(state: &AppState) -> Router {
    let service = DeporteService::new(state.repository.clone());
    handlers::router(service)
}

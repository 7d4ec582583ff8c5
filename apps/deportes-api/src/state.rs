//! Application state management.
//!
//! The state is built once in `main` and handed to the route builders.

use domain_deportes::JsonFileDeporteRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Catalog file, already created if it was missing
    pub repository: JsonFileDeporteRepository,
}

//! Deportes Domain
//!
//! A sports catalog kept as one JSON file: every request loads the whole
//! collection, works on it in memory and, when it changes something, writes
//! the whole collection back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/deportes, /agregar, /borrar, /editar)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, load/mutate/save cycle, write lock
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Whole-collection load/save (trait + JSON file)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Deporte, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_deportes::{handlers, JsonFileDeporteRepository, DeporteService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = JsonFileDeporteRepository::new("db/deportes.json");
//! repository.ensure_exists().await?;
//!
//! let service = DeporteService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod messages;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DeporteError, DeporteResult, StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use json_file::JsonFileDeporteRepository;
pub use models::{Acknowledgement, CreateDeporte, Deporte, UpdatePrice};
pub use repository::DeporteRepository;
pub use service::DeporteService;

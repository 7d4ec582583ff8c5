use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::Deporte;

/// Whole-collection persistence for deportes.
///
/// There is no per-item access: every operation loads the full ordered
/// collection and mutating ones save it back in full. Implementations must
/// make `save` atomic for concurrent readers (a `load` racing a `save` sees
/// either the old or the new collection, never a mix).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeporteRepository: Send + Sync {
    /// Read the entire collection in stored order
    async fn load(&self) -> StoreResult<Vec<Deporte>>;

    /// Replace the entire collection
    async fn save(&self, deportes: Vec<Deporte>) -> StoreResult<()>;
}

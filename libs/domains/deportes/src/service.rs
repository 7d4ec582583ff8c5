//! Deporte Service - Business logic layer

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;
use validator::Validate;

use crate::error::{DeporteError, DeporteResult, StorageContext};
use crate::messages;
use crate::models::{CreateDeporte, Deporte, UpdatePrice};
use crate::repository::DeporteRepository;

/// Deporte service providing the load/mutate/save cycle for each operation.
///
/// Mutating operations hold `write_lock` from `load` to `save`, so two
/// requests in this process cannot interleave their cycles. Clones share
/// the lock.
pub struct DeporteService<R: DeporteRepository> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
}

impl<R: DeporteRepository> DeporteService<R> {
    /// Create a new DeporteService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Whole collection, in stored order
    #[instrument(skip(self))]
    pub async fn list_deportes(&self) -> DeporteResult<Vec<Deporte>> {
        self.repository
            .load()
            .await
            .or_fail_with(messages::READ_FAILED)
    }

    /// Append a deporte. Names are not deduplicated.
    #[instrument(skip(self, input), fields(deporte_name = ?input.name))]
    pub async fn create_deporte(&self, input: CreateDeporte) -> DeporteResult<Deporte> {
        input
            .validate()
            .map_err(|_| DeporteError::Validation(messages::NAME_AND_PRICE_REQUIRED))?;

        let (Some(name), Some(price)) = (input.name, input.price) else {
            return Err(DeporteError::Validation(messages::NAME_AND_PRICE_REQUIRED));
        };
        let deporte = Deporte::new(name, price);

        let _guard = self.write_lock.lock().await;
        let mut deportes = self
            .repository
            .load()
            .await
            .or_fail_with(messages::CREATE_FAILED)?;
        deportes.push(deporte.clone());
        self.repository
            .save(deportes)
            .await
            .or_fail_with(messages::CREATE_FAILED)?;

        tracing::info!(deporte_name = %deporte.name, "Deporte created successfully");
        Ok(deporte)
    }

    /// Remove every deporte named `name`; returns how many were removed.
    ///
    /// Nothing is written when no name matches.
    #[instrument(skip(self))]
    pub async fn delete_deporte(&self, name: &str) -> DeporteResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut deportes = self
            .repository
            .load()
            .await
            .or_fail_with(messages::DELETE_FAILED)?;

        let before = deportes.len();
        deportes.retain(|deporte| deporte.name != name);
        let removed = before - deportes.len();
        if removed == 0 {
            return Err(DeporteError::NotFound(name.to_string()));
        }

        self.repository
            .save(deportes)
            .await
            .or_fail_with(messages::DELETE_FAILED)?;

        tracing::info!(removed, "Deporte deleted successfully");
        Ok(removed)
    }

    /// Set the price of the first deporte named `name`.
    ///
    /// Later duplicates keep their price. Nothing is written when no name
    /// matches.
    #[instrument(skip(self, input))]
    pub async fn update_price(&self, name: &str, input: UpdatePrice) -> DeporteResult<Deporte> {
        input
            .validate()
            .map_err(|_| DeporteError::Validation(messages::NEW_PRICE_REQUIRED))?;
        let Some(new_price) = input.new_price else {
            return Err(DeporteError::Validation(messages::NEW_PRICE_REQUIRED));
        };

        let _guard = self.write_lock.lock().await;
        let mut deportes = self
            .repository
            .load()
            .await
            .or_fail_with(messages::UPDATE_FAILED)?;

        let deporte = deportes
            .iter_mut()
            .find(|deporte| deporte.name == name)
            .ok_or_else(|| DeporteError::NotFound(name.to_string()))?;
        deporte.price = new_price;
        let updated = deporte.clone();

        self.repository
            .save(deportes)
            .await
            .or_fail_with(messages::UPDATE_FAILED)?;

        tracing::info!("Deporte price updated successfully");
        Ok(updated)
    }
}

impl<R: DeporteRepository> Clone for DeporteService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

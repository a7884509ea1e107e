//! Application state shared across handlers.

use carefinder_lib::{Error as LibError, ProviderStore};
use thiserror::Error;

use crate::config::ServiceConfig;

/// Error during application state initialization.
#[derive(Debug, Error)]
pub enum AppStateError {
    /// The provider database could not be opened.
    #[error("failed to open provider database: {0}")]
    Connect(#[source] LibError),

    /// The providers schema could not be prepared.
    #[error("failed to prepare provider schema: {0}")]
    Schema(#[source] LibError),
}

/// Shared state for axum handlers.
///
/// Cheaply cloneable: the store wraps a reference-counted, bounded pool, so
/// every in-flight request shares the same connections.
#[derive(Clone)]
pub struct AppState {
    store: ProviderStore,
}

impl AppState {
    /// Wrap an already-connected store (used by tests).
    pub fn new(store: ProviderStore) -> Self {
        Self { store }
    }

    /// Connect the bounded pool and prepare the schema.
    pub async fn init(config: &ServiceConfig) -> Result<Self, AppStateError> {
        let store = ProviderStore::connect(&config.database_url, config.max_connections)
            .await
            .map_err(AppStateError::Connect)?;
        store.init_schema().await.map_err(AppStateError::Schema)?;
        Ok(Self { store })
    }

    /// Access the provider store.
    pub fn store(&self) -> &ProviderStore {
        &self.store
    }
}

use std::sync::Arc;

use booth_core::DataStore;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: DataStore,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: DataStore, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { store, config }),
        }
    }

    /// Build the state with a store over `config.data_file`.
    pub fn from_config(config: AppConfig) -> Self {
        let store = DataStore::new(config.data_file.clone());
        Self::new(store, config)
    }

    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}

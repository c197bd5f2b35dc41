//! Application state for the shift pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded service configuration and the record store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// Employer and shift records.
    store: MemoryStore,
}

impl AppState {
    /// Creates a new application state from a configuration and a store.
    pub fn new(config: ConfigLoader, store: MemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

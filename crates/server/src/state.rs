//! Application state shared across handlers.

use std::sync::Arc;

use vitrine_core::ValidationMode;

use crate::config::ServerConfig;
use crate::store::{CatalogStore, OrderLog};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and both stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: CatalogStore,
    orders: OrderLog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, catalog: CatalogStore, orders: OrderLog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the order log.
    #[must_use]
    pub fn orders(&self) -> &OrderLog {
        &self.inner.orders
    }

    /// The query-parameter validation mode this deployment runs with.
    #[must_use]
    pub fn validation_mode(&self) -> ValidationMode {
        self.inner.config.validation_mode
    }
}

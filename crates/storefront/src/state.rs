//! Application state shared across handlers.

use std::sync::Arc;

use brunelli_core::catalog::{Catalog, CatalogStore};
use tokio::sync::RwLock;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Per-shopper state (cart, wishlist, identity,
/// orders) lives in the session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: RwLock<CatalogStore>,
}

impl AppState {
    /// Create a new application state serving `catalog`.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(CatalogStore::new(catalog)),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The shared catalog. Shoppers take the read lock, admin commands the
    /// write lock.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<CatalogStore> {
        &self.inner.catalog
    }
}

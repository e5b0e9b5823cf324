//! Application state shared across handlers.

use std::sync::Arc;

use loperez_core::{Catalog, CatalogError, seed};

use crate::carts::CartStore;
use crate::config::StorefrontConfig;
use crate::middleware::session::{MAX_SESSIONS, session_idle_timeout};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is immutable after
/// construction, so handlers read it without locking. Carts are mutable and
/// guarded per session inside [`CartStore`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartStore,
}

impl AppState {
    /// Create application state around an already validated catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts: CartStore::new(MAX_SESSIONS, session_idle_timeout()),
            }),
        }
    }

    /// Create application state with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails validation.
    pub fn with_seed_catalog(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = seed::catalog()?;
        tracing::info!(
            categories = catalog.categories().len(),
            products = catalog.products().len(),
            "Catalog loaded"
        );
        Ok(Self::new(config, catalog))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the per-session cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}

//! Shared handler state.

use std::sync::Arc;

use catalog_products::CatalogStore;

/// Everything handlers need, shared behind an `Arc` via `Extension`.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<CatalogStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }
}

/// Services backed by the seeded in-memory catalog.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(CatalogStore::seeded()))
}

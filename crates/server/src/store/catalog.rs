//! Catalog document loading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vitrine_core::Catalog;

use super::StoreError;

/// Read-only access to the catalog JSON document.
///
/// The document is parsed once at startup. In `reload_per_request` mode
/// every call to [`CatalogStore::current`] re-reads it from disk instead,
/// so catalog edits show up without a restart.
pub struct CatalogStore {
    path: PathBuf,
    reload_per_request: bool,
    cached: Arc<Catalog>,
}

impl CatalogStore {
    /// Open the store, reading and validating the document once.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the document is unreadable or malformed.
    pub async fn open(path: PathBuf, reload_per_request: bool) -> Result<Self, StoreError> {
        let catalog = read_catalog(&path).await?;
        tracing::info!(
            path = %path.display(),
            goods = catalog.goods.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            path,
            reload_per_request,
            cached: Arc::new(catalog),
        })
    }

    /// The catalog to serve this request from.
    ///
    /// # Errors
    ///
    /// Only fails in reload mode, when the re-read fails.
    pub async fn current(&self) -> Result<Arc<Catalog>, StoreError> {
        if self.reload_per_request {
            Ok(Arc::new(read_catalog(&self.path).await?))
        } else {
            Ok(Arc::clone(&self.cached))
        }
    }
}

async fn read_catalog(path: &Path) -> Result<Catalog, StoreError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| StoreError::read(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::parse(path, e))
}

//! The append-only order log, persisted as one JSON array.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use vitrine_core::Order;

use super::StoreError;

/// Order log backed by a JSON document that is rewritten in full after
/// every accepted order.
///
/// Append and persist happen under one lock, so concurrent submissions
/// serialize and a slower write can never clobber a faster one. An order is
/// only reported accepted once its write has completed.
pub struct OrderLog {
    path: PathBuf,
    entries: Mutex<Vec<Order>>,
}

impl OrderLog {
    /// Open the log, loading any existing orders. A missing document is an
    /// empty log, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if an existing document is unreadable or
    /// malformed.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::parse(&path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::read(&path, e)),
        };

        tracing::info!(path = %path.display(), orders = entries.len(), "order log loaded");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Append an order and persist the whole log.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the write fails; the
    /// in-memory append is rolled back so memory and disk stay in step.
    pub async fn record(&self, order: Order) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.push(order);

        match persist(&self.path, &entries).await {
            Ok(()) => Ok(()),
            Err(e) => {
                entries.pop();
                Err(e)
            }
        }
    }
}

async fn persist(path: &Path, entries: &[Order]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(entries).map_err(|e| StoreError::parse(path, e))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| StoreError::write(path, e))
}

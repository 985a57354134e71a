//! JSON document stores: the read-only catalog and the append-only order log.

mod catalog;
mod orders;

use std::path::Path;

pub use catalog::CatalogStore;
pub use orders::OrderLog;

use thiserror::Error;

/// Errors reading or writing the backing JSON documents.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}

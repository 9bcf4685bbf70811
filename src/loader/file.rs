use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::Product;
use crate::loader::{decode_products, CatalogSource, LoadError};

/// Reads a saved `{"products": [...]}` document from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| LoadError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        decode_products(&bytes).map_err(|e| LoadError::Parse {
            origin: self.path.display().to_string(),
            source: e,
        })
    }
}

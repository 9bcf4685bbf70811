//! Sources for the initial product list.
//!
//! A source is called once at startup (and again on an explicit reload).
//! Failures never reach the catalog: [`load_or_empty`] logs them and seeds
//! an empty list instead.

mod file;
mod http;
mod wire;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Product;

pub use file::FileSource;
pub use http::HttpSource;
pub use wire::decode_products;

/// Errors that can occur while fetching the product list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse product list from '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short description for logs (URL, path, ...).
    fn describe(&self) -> String;

    /// Fetch the ordered product list.
    async fn fetch(&self) -> Result<Vec<Product>, LoadError>;
}

/// Fetch from `source`, substituting an empty list on failure.
pub async fn load_or_empty(source: &dyn CatalogSource) -> Vec<Product> {
    match source.fetch().await {
        Ok(products) => {
            tracing::info!(
                source = %source.describe(),
                count = products.len(),
                "Product list loaded"
            );
            products
        }
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "Failed to load product list, starting with an empty catalog"
            );
            Vec::new()
        }
    }
}

/// A fixed, in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn describe(&self) -> String {
        format!("static ({} products)", self.products.len())
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        Ok(self.products.clone())
    }
}

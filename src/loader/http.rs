use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::catalog::Product;
use crate::config::SourceConfig;
use crate::loader::{decode_products, CatalogSource, LoadError};

/// Fetches the product list with a single GET request.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .user_agent(concat!("catalog-editor/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs.into()));
        }
        let client = builder.build().map_err(LoadError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Request {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LoadError::Request {
            url: self.url.clone(),
            source: e,
        })?;

        decode_products(&body).map_err(|e| LoadError::Parse {
            origin: self.url.clone(),
            source: e,
        })
    }
}

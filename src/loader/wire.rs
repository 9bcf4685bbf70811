//! JSON shape of the remote product list.

use serde::Deserialize;

use crate::catalog::{Product, ProductId};

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<WireProduct>,
}

#[derive(Debug, Deserialize)]
struct WireProduct {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Vec<String>,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Product {
            id: ProductId(wire.id),
            title: wire.title,
            description: wire.description,
            image_url: wire.images.into_iter().next(),
        }
    }
}

/// Decode `{"products": [...]}`, keeping the remote order.
pub fn decode_products(bytes: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    let envelope: ProductsEnvelope = serde_json::from_slice(bytes)?;
    Ok(envelope.products.into_iter().map(Product::from).collect())
}

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::EditSession;
use crate::form::ProductForm;

/// Identifier of a product, unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_start_matches('#').parse().map(ProductId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Whether the catalog models product images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    /// Title and description only; an image URL is optional.
    #[default]
    Minimal,
    /// Every created product must carry an image URL.
    WithImages,
}

impl ImageMode {
    pub fn requires_image(self) -> bool {
        matches!(self, Self::WithImages)
    }
}

/// Display state of a record that is present in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Viewing,
    Editing,
}

/// Result of a mutation that cannot fail but may not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The referenced id is not in the catalog (e.g. already deleted).
    NotFound(ProductId),
    /// No edit session is open for the referenced id.
    NoActiveSession,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owned copy of everything a view needs to render the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub editing: Option<EditSession>,
    pub draft: ProductForm,
    pub image_mode: ImageMode,
}

impl CatalogSnapshot {
    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing.as_ref().map(EditSession::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parses_with_or_without_hash() {
        assert_eq!("102".parse::<ProductId>(), Ok(ProductId(102)));
        assert_eq!("#7".parse::<ProductId>(), Ok(ProductId(7)));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn image_mode_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ImageMode,
        }
        let wrapper: Wrapper = toml::from_str("mode = \"with_images\"").unwrap();
        assert_eq!(wrapper.mode, ImageMode::WithImages);
    }
}

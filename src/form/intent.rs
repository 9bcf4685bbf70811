use crate::catalog::Product;
use crate::form::DraftField;

/// An edit applied to a [`ProductForm`](crate::form::ProductForm).
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// User typed into a field. An empty image URL clears the image.
    SetField { field: DraftField, value: String },
    /// Overwrite every field from an existing product.
    Prefill { product: Product },
    /// Reset all fields to empty.
    Clear,
}

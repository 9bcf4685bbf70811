use crate::catalog::{Product, ProductId};
use crate::form::{DraftField, FormIntent, ProductForm};

/// Draft state of the one product currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: ProductId,
    draft: ProductForm,
}

impl EditSession {
    /// Open a session prefilled from the product's current values.
    pub fn begin(product: &Product) -> Self {
        let mut draft = ProductForm::default();
        draft.apply(FormIntent::Prefill {
            product: product.clone(),
        });
        Self {
            id: product.id,
            draft,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn draft(&self) -> &ProductForm {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Overwrite the product's mutable fields with the draft, verbatim.
    pub(crate) fn write_into(self, product: &mut Product) {
        debug_assert_eq!(product.id, self.id);
        product.title = self.draft.title;
        product.description = self.draft.description;
        product.image_url = self.draft.image_url;
    }
}

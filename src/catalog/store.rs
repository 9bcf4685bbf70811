//! The catalog store.
//!
//! Owns the product list, the create-form draft and the single edit slot.
//! All operations are synchronous: the caller observes the new state as
//! soon as the method returns.

use crate::catalog::allocator;
use crate::catalog::{
    CatalogError, CatalogSnapshot, EditSession, ImageMode, Outcome, Product, ProductId,
    RecordState,
};
use crate::form::{DraftField, FormIntent, ProductForm};

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    /// At most one record is being edited; its id is always in `products`.
    editing: Option<EditSession>,
    draft: ProductForm,
    image_mode: ImageMode,
}

impl CatalogStore {
    pub fn new(image_mode: ImageMode) -> Self {
        Self {
            image_mode,
            ..Self::default()
        }
    }

    /// Replace the catalog wholesale with the loader's records.
    ///
    /// Any open edit session is dropped since its record may be gone.
    pub fn seed(&mut self, records: Vec<Product>) {
        if let Some(session) = self.editing.take() {
            tracing::debug!(id = %session.id(), "Edit session discarded by reseed");
        }
        self.products = records;
        tracing::info!(count = self.products.len(), "Catalog seeded");
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn draft(&self) -> &ProductForm {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing.as_ref().map(EditSession::id)
    }

    pub fn record_state(&self, id: ProductId) -> Option<RecordState> {
        if !self.contains(id) {
            return None;
        }
        if self.editing_id() == Some(id) {
            Some(RecordState::Editing)
        } else {
            Some(RecordState::Viewing)
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            editing: self.editing.clone(),
            draft: self.draft.clone(),
            image_mode: self.image_mode,
        }
    }

    /// Edit a field of the create form.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Create a product from the store's own create form.
    pub fn submit_draft(&mut self) -> Result<ProductId, CatalogError> {
        let draft = self.draft.clone();
        self.create(&draft)
    }

    /// Validate `draft` and append a new product with a synthesized id.
    ///
    /// On success the create form is cleared. On failure nothing changes,
    /// so the form keeps whatever the user typed.
    pub fn create(&mut self, draft: &ProductForm) -> Result<ProductId, CatalogError> {
        let missing = draft.missing_fields(self.image_mode);
        if !missing.is_empty() {
            tracing::debug!(?missing, "Create rejected by validation");
            return Err(CatalogError::Validation { missing });
        }

        let id = allocator::next_id(self.products.len());
        if self.contains(id) {
            tracing::warn!(id = %id, "Synthesized product id duplicates an existing product");
        }

        self.products.push(Product {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
        });
        self.draft.apply(FormIntent::Clear);

        tracing::info!(id = %id, "Product created");
        Ok(id)
    }

    /// Open the edit slot on `id`, discarding any other open session.
    pub fn begin_edit(&mut self, id: ProductId) -> Outcome {
        let Some(product) = self.get(id) else {
            tracing::debug!(id = %id, "Edit requested for unknown product");
            return Outcome::NotFound(id);
        };

        let session = EditSession::begin(product);
        if let Some(previous) = self.editing.replace(session) {
            if previous.id() != id {
                tracing::debug!(
                    discarded = %previous.id(),
                    id = %id,
                    "Uncommitted edit preempted"
                );
            }
        }
        Outcome::Applied
    }

    /// Edit a draft field of the open session.
    pub fn set_edit_field(&mut self, field: DraftField, value: impl Into<String>) -> Outcome {
        match self.editing.as_mut() {
            Some(session) => {
                session.set_field(field, value);
                Outcome::Applied
            }
            None => Outcome::NoActiveSession,
        }
    }

    /// Write the open session's draft over the product and close the session.
    ///
    /// Drafts are not validated here, unlike [`create`](Self::create).
    pub fn commit_edit(&mut self, id: ProductId) -> Outcome {
        let Some(session) = self.editing.take_if(|session| session.id() == id) else {
            tracing::debug!(id = %id, "Commit without an open session for this product");
            return Outcome::NoActiveSession;
        };

        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Outcome::NotFound(id);
        };
        session.write_into(product);

        tracing::info!(id = %id, "Product updated");
        Outcome::Applied
    }

    /// Close the edit slot without touching the catalog. Idempotent.
    pub fn cancel_edit(&mut self) -> Outcome {
        match self.editing.take() {
            Some(session) => {
                tracing::debug!(id = %session.id(), "Edit cancelled");
                Outcome::Applied
            }
            None => Outcome::NoActiveSession,
        }
    }

    /// Remove the product with `id`. Callers obtain confirmation first.
    pub fn delete(&mut self, id: ProductId) -> Outcome {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(id = %id, "Delete ignored for unknown product");
            return Outcome::NotFound(id);
        };

        self.products.remove(index);
        if self.editing_id() == Some(id) {
            self.editing = None;
        }

        tracing::info!(id = %id, "Product deleted");
        Outcome::Applied
    }
}

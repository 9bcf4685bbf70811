use thiserror::Error;
use tokio::sync::oneshot;

use crate::catalog::{CatalogError, CatalogSnapshot, Outcome, ProductId};
use crate::form::{DraftField, ProductForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Editor runtime disconnected")]
    Disconnected,
}

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// The user was asked; the product goes once they confirm.
    AwaitingConfirmation,
    NotFound(ProductId),
}

pub enum EditorCommand {
    /// Re-run the loader and reseed. Responds with the new product count.
    Reload {
        respond_to: oneshot::Sender<usize>,
    },
    Snapshot {
        respond_to: oneshot::Sender<CatalogSnapshot>,
    },
    SetDraftField {
        field: DraftField,
        value: String,
        respond_to: oneshot::Sender<()>,
    },
    SubmitDraft {
        respond_to: oneshot::Sender<Result<ProductId, CatalogError>>,
    },
    Create {
        draft: ProductForm,
        respond_to: oneshot::Sender<Result<ProductId, CatalogError>>,
    },
    BeginEdit {
        id: ProductId,
        respond_to: oneshot::Sender<Outcome>,
    },
    SetEditField {
        field: DraftField,
        value: String,
        respond_to: oneshot::Sender<Outcome>,
    },
    CommitEdit {
        id: ProductId,
        respond_to: oneshot::Sender<Outcome>,
    },
    CancelEdit {
        respond_to: oneshot::Sender<Outcome>,
    },
    Delete {
        id: ProductId,
        respond_to: oneshot::Sender<DeleteStatus>,
    },
}

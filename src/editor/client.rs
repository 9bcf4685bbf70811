use tokio::sync::{mpsc, oneshot};

use crate::catalog::{CatalogError, CatalogSnapshot, Outcome, ProductId};
use crate::form::{DraftField, ProductForm};

use super::types::{DeleteStatus, EditorCommand, EditorError};

#[derive(Clone)]
pub struct EditorClient {
    sender: mpsc::Sender<EditorCommand>,
}

impl EditorClient {
    pub fn new(sender: mpsc::Sender<EditorCommand>) -> Self {
        Self { sender }
    }

    pub async fn reload(&self) -> Result<usize, EditorError> {
        self.request(|respond_to| EditorCommand::Reload { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<CatalogSnapshot, EditorError> {
        self.request(|respond_to| EditorCommand::Snapshot { respond_to })
            .await
    }

    pub async fn set_draft_field(
        &self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let value = value.into();
        self.request(|respond_to| EditorCommand::SetDraftField {
            field,
            value,
            respond_to,
        })
        .await
    }

    pub async fn submit_draft(&self) -> Result<Result<ProductId, CatalogError>, EditorError> {
        self.request(|respond_to| EditorCommand::SubmitDraft { respond_to })
            .await
    }

    pub async fn create(
        &self,
        draft: ProductForm,
    ) -> Result<Result<ProductId, CatalogError>, EditorError> {
        self.request(|respond_to| EditorCommand::Create { draft, respond_to })
            .await
    }

    pub async fn begin_edit(&self, id: ProductId) -> Result<Outcome, EditorError> {
        self.request(|respond_to| EditorCommand::BeginEdit { id, respond_to })
            .await
    }

    pub async fn set_edit_field(
        &self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<Outcome, EditorError> {
        let value = value.into();
        self.request(|respond_to| EditorCommand::SetEditField {
            field,
            value,
            respond_to,
        })
        .await
    }

    pub async fn commit_edit(&self, id: ProductId) -> Result<Outcome, EditorError> {
        self.request(|respond_to| EditorCommand::CommitEdit { id, respond_to })
            .await
    }

    pub async fn cancel_edit(&self) -> Result<Outcome, EditorError> {
        self.request(|respond_to| EditorCommand::CancelEdit { respond_to })
            .await
    }

    /// Ask for confirmation and delete once the user agrees.
    ///
    /// Returns as soon as the prompt is out; the deletion itself happens
    /// when the answer arrives.
    pub async fn delete(&self, id: ProductId) -> Result<DeleteStatus, EditorError> {
        self.request(|respond_to| EditorCommand::Delete { id, respond_to })
            .await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> EditorCommand,
    ) -> Result<T, EditorError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(command(respond_to))
            .await
            .map_err(|_| EditorError::Disconnected)?;

        receiver.await.map_err(|_| EditorError::Disconnected)
    }
}

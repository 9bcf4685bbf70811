use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::catalog::{CatalogError, CatalogStore, ProductId};
use crate::loader::{load_or_empty, CatalogSource};
use crate::notifier::{Notice, Notifier, Prompt};

use super::confirmations::PendingConfirmations;
use super::types::{DeleteStatus, EditorCommand};

pub struct EditorRuntime {
    receiver: mpsc::Receiver<EditorCommand>,
    store: CatalogStore,
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn CatalogSource>,
    confirmations: PendingConfirmations,
}

impl EditorRuntime {
    pub fn new(
        receiver: mpsc::Receiver<EditorCommand>,
        store: CatalogStore,
        notifier: Arc<dyn Notifier>,
        source: Arc<dyn CatalogSource>,
    ) -> Self {
        Self {
            receiver,
            store,
            notifier,
            source,
            confirmations: PendingConfirmations::default(),
        }
    }

    /// Process commands until every client is dropped.
    ///
    /// Answered confirmations are applied before the next queued command, so
    /// a delete the user already confirmed is visible to whatever they do next.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;

                (id, confirmed) = self.confirmations.next(), if !self.confirmations.is_empty() => {
                    self.resolve_delete(id, confirmed);
                }
                command = self.receiver.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    self.handle(command).await;
                }
            }
        }
        tracing::debug!("Editor runtime stopped");
    }

    async fn handle(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Reload { respond_to } => {
                let products = load_or_empty(self.source.as_ref()).await;
                self.store.seed(products);
                reply(respond_to, self.store.len(), "Reload");
            }
            EditorCommand::Snapshot { respond_to } => {
                reply(respond_to, self.store.snapshot(), "Snapshot");
            }
            EditorCommand::SetDraftField {
                field,
                value,
                respond_to,
            } => {
                self.store.set_draft_field(field, value);
                reply(respond_to, (), "SetDraftField");
            }
            EditorCommand::SubmitDraft { respond_to } => {
                let result = self.store.submit_draft();
                self.report_create(&result);
                reply(respond_to, result, "SubmitDraft");
            }
            EditorCommand::Create { draft, respond_to } => {
                let result = self.store.create(&draft);
                self.report_create(&result);
                reply(respond_to, result, "Create");
            }
            EditorCommand::BeginEdit { id, respond_to } => {
                let outcome = self.store.begin_edit(id);
                reply(respond_to, outcome, "BeginEdit");
            }
            EditorCommand::SetEditField {
                field,
                value,
                respond_to,
            } => {
                let outcome = self.store.set_edit_field(field, value);
                reply(respond_to, outcome, "SetEditField");
            }
            EditorCommand::CommitEdit { id, respond_to } => {
                let outcome = self.store.commit_edit(id);
                if outcome.is_applied() {
                    self.notifier.notify(Notice::product_updated());
                }
                reply(respond_to, outcome, "CommitEdit");
            }
            EditorCommand::CancelEdit { respond_to } => {
                let outcome = self.store.cancel_edit();
                reply(respond_to, outcome, "CancelEdit");
            }
            EditorCommand::Delete { id, respond_to } => {
                let status = if self.store.contains(id) {
                    let answer = self.notifier.confirm(Prompt::delete_product());
                    self.confirmations.push(id, answer);
                    DeleteStatus::AwaitingConfirmation
                } else {
                    tracing::debug!(id = %id, "Delete requested for unknown product");
                    DeleteStatus::NotFound(id)
                };
                reply(respond_to, status, "Delete");
            }
        }
    }

    fn report_create(&self, result: &Result<ProductId, CatalogError>) {
        match result {
            Ok(_) => self.notifier.notify(Notice::product_added()),
            Err(e) => self.notifier.notify(Notice::from_create_error(e)),
        }
    }

    fn resolve_delete(&mut self, id: ProductId, confirmed: bool) {
        if !confirmed {
            tracing::debug!(id = %id, "Delete declined");
            return;
        }
        if self.store.delete(id).is_applied() {
            self.notifier.notify(Notice::product_deleted());
        }
    }
}

fn reply<T>(respond_to: oneshot::Sender<T>, value: T, command: &str) {
    if respond_to.send(value).is_err() {
        tracing::trace!(command, "Editor response dropped (receiver gone)");
    }
}

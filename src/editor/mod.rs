//! Event loop that owns the catalog.
//!
//! Hosts talk to the catalog through an [`EditorClient`]; the single
//! [`EditorRuntime`] applies commands strictly in arrival order, reports
//! outcomes through the [`Notifier`](crate::notifier::Notifier), and folds
//! delete confirmations back in as they are answered.

mod client;
mod confirmations;
mod runtime;
mod types;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::CatalogStore;
use crate::loader::CatalogSource;
use crate::notifier::Notifier;

pub use client::EditorClient;
pub use runtime::EditorRuntime;
pub use types::{DeleteStatus, EditorCommand, EditorError};

const EDITOR_BUFFER: usize = 16;

pub struct EditorLayer;

impl EditorLayer {
    pub fn new(
        store: CatalogStore,
        notifier: Arc<dyn Notifier>,
        source: Arc<dyn CatalogSource>,
    ) -> (EditorClient, EditorRuntime) {
        let (sender, receiver) = mpsc::channel(EDITOR_BUFFER);
        (
            EditorClient::new(sender),
            EditorRuntime::new(receiver, store, notifier, source),
        )
    }
}

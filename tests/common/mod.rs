//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use catalog_editor::catalog::{CatalogStore, ImageMode, Product, ProductId};
use catalog_editor::editor::{EditorClient, EditorLayer};
use catalog_editor::loader::StaticSource;
use catalog_editor::notifier::{Notice, Notifier, Prompt};
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub fn product(id: u64, title: &str, description: &str) -> Product {
    Product::new(ProductId(id), title, description)
}

pub fn seeded_store(products: Vec<Product>) -> CatalogStore {
    let mut store = CatalogStore::new(ImageMode::Minimal);
    store.seed(products);
    store
}

// -- Notifier -----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPolicy {
    Accept,
    Decline,
    /// Hold answers until the test calls `answer_next`.
    Manual,
}

/// Notifier that records everything and answers prompts per policy.
pub struct RecordingNotifier {
    policy: ConfirmPolicy,
    notices: Mutex<Vec<Notice>>,
    prompts: Mutex<Vec<Prompt>>,
    waiting: Mutex<Vec<oneshot::Sender<bool>>>,
}

impl RecordingNotifier {
    pub fn new(policy: ConfirmPolicy) -> Arc<Self> {
        Arc::new(Self {
            policy,
            notices: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            waiting: Mutex::new(Vec::new()),
        })
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().clone()
    }

    /// Answer the oldest unanswered prompt. Returns false if none is waiting.
    pub fn answer_next(&self, confirmed: bool) -> bool {
        let mut waiting = self.waiting.lock();
        if waiting.is_empty() {
            return false;
        }
        let sender = waiting.remove(0);
        let _ = sender.send(confirmed);
        true
    }

    pub fn waiting(&self) -> usize {
        self.waiting.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }

    fn confirm(&self, prompt: Prompt) -> oneshot::Receiver<bool> {
        self.prompts.lock().push(prompt);
        let (sender, receiver) = oneshot::channel();
        match self.policy {
            ConfirmPolicy::Accept => {
                let _ = sender.send(true);
            }
            ConfirmPolicy::Decline => {
                let _ = sender.send(false);
            }
            ConfirmPolicy::Manual => self.waiting.lock().push(sender),
        }
        receiver
    }
}

// -- Editor helpers -----------------------------------------------------------

/// Spawn an editor over a static source and seed it.
pub async fn spawn_editor(
    products: Vec<Product>,
    notifier: Arc<RecordingNotifier>,
) -> (EditorClient, JoinHandle<()>) {
    spawn_editor_with_mode(products, notifier, ImageMode::Minimal).await
}

pub async fn spawn_editor_with_mode(
    products: Vec<Product>,
    notifier: Arc<RecordingNotifier>,
    mode: ImageMode,
) -> (EditorClient, JoinHandle<()>) {
    let source = Arc::new(StaticSource::new(products));
    let (client, runtime) = EditorLayer::new(CatalogStore::new(mode), notifier, source);
    let task = tokio::spawn(runtime.run());
    client.reload().await.expect("initial reload");
    (client, task)
}

// -- Files --------------------------------------------------------------------

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a `{"products": [...]}` document into a fresh temp dir.
pub fn temp_products_file(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("products.json");
    let mut file = std::fs::File::create(&path).expect("Failed to create products file");
    file.write_all(json.as_bytes())
        .expect("Failed to write products file");
    (temp_dir, path)
}

pub const TWO_PRODUCTS_JSON: &str = r#"{
    "products": [
        {"id": 1, "title": "Essence Mascara", "description": "Volumizing mascara",
         "images": ["https://cdn.example/1.png"]},
        {"id": 2, "title": "Eyeshadow Palette", "description": "Twelve shades"}
    ],
    "total": 2, "skip": 0, "limit": 30
}"#;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use catalog_editor::catalog::CatalogStore;
use catalog_editor::cli::Cli;
use catalog_editor::config::Config;
use catalog_editor::editor::EditorLayer;
use catalog_editor::loader::{CatalogSource, FileSource, HttpSource};
use catalog_editor::logging::init_tracing;
use catalog_editor::notifier::{Notifier, TerminalNotifier};
use catalog_editor::repl::Repl;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Warning: {}", e);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let source: Arc<dyn CatalogSource> = match &cli.seed_file {
        Some(path) => Arc::new(FileSource::new(path)),
        None => Arc::new(HttpSource::new(&config.source)?),
    };
    tracing::info!(source = %source.describe(), "Starting catalog editor");

    let console = Arc::new(TerminalNotifier::stdout());
    let notifier: Arc<dyn Notifier> = console.clone();
    let store = CatalogStore::new(config.catalog.image_mode);
    let (client, editor) = EditorLayer::new(store, notifier, source);
    let editor_task = tokio::spawn(editor.run());

    let count = client.reload().await?;
    console.print(&format!("Loaded {} products.", count));

    let repl = Repl::new(client, console);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let result = repl.run(stdin).await;

    drop(repl);
    let _ = editor_task.await;
    result.map_err(Into::into)
}

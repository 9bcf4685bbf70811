//! Line-oriented shell over the editor.
//!
//! Reads one command per line, forwards it to the [`EditorClient`], and
//! prints results through the same [`TerminalNotifier`] that shows notices,
//! so prompts and output interleave in event order.

mod command;
mod render;

use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::catalog::{Outcome, ProductId};
use crate::editor::{DeleteStatus, EditorClient, EditorError};
use crate::notifier::TerminalNotifier;

pub use command::{Command, CommandError, HELP};
pub use render::{render_catalog, render_product};

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub struct Repl {
    client: EditorClient,
    console: Arc<TerminalNotifier>,
}

impl Repl {
    pub fn new(client: EditorClient, console: Arc<TerminalNotifier>) -> Self {
        Self { client, console }
    }

    /// Run until `quit` or end of input.
    pub async fn run<R>(&self, input: R) -> Result<(), ReplError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.console
            .print("Product Manager (type 'help' for commands)");

        while let Some(line) = lines.next_line().await? {
            if self.console.answer_pending(&line) {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    self.console.print(&format!("Error: {}", e));
                    continue;
                }
            };
            self.execute(command).await?;
        }
        Ok(())
    }

    async fn execute(&self, command: Command) -> Result<(), EditorError> {
        match command {
            Command::List => {
                let snapshot = self.client.snapshot().await?;
                self.console.print(&render_catalog(&snapshot));
            }
            Command::Show(id) => {
                let snapshot = self.client.snapshot().await?;
                match snapshot.products.iter().find(|p| p.id == id) {
                    Some(product) => self.console.print(&render_product(product, &snapshot)),
                    None => self.not_found(id),
                }
            }
            Command::Draft { field, value } => {
                self.client.set_draft_field(field, value).await?;
            }
            Command::Add(None) => {
                // Outcome is reported by the notifier.
                let _ = self.client.submit_draft().await?;
            }
            Command::Add(Some(form)) => {
                let _ = self.client.create(form).await?;
            }
            Command::Edit(id) => match self.client.begin_edit(id).await? {
                Outcome::Applied => {
                    let snapshot = self.client.snapshot().await?;
                    if let Some(product) = snapshot.products.iter().find(|p| p.id == id) {
                        self.console.print(&render_product(product, &snapshot));
                    }
                }
                _ => self.not_found(id),
            },
            Command::Set { field, value } => {
                if self.client.set_edit_field(field, value).await? == Outcome::NoActiveSession {
                    self.console
                        .print("Not editing any product (use 'edit <id>' first)");
                }
            }
            Command::Save(id) => {
                let id = match id {
                    Some(id) => Some(id),
                    None => self.client.snapshot().await?.editing_id(),
                };
                let Some(id) = id else {
                    self.console.print("Not editing any product");
                    return Ok(());
                };
                if self.client.commit_edit(id).await? == Outcome::NoActiveSession {
                    self.console
                        .print(&format!("Product #{} is not being edited", id));
                }
            }
            Command::Cancel => {
                if self.client.cancel_edit().await?.is_applied() {
                    self.console.print("Edit cancelled.");
                }
            }
            Command::Delete(id) => {
                if let DeleteStatus::NotFound(id) = self.client.delete(id).await? {
                    self.not_found(id);
                }
            }
            Command::Reload => {
                let count = self.client.reload().await?;
                self.console.print(&format!("Loaded {} products.", count));
            }
            Command::Help => self.console.print(HELP),
            Command::Quit => {}
        }
        Ok(())
    }

    fn not_found(&self, id: ProductId) {
        self.console.print(&format!("Product #{} not found", id));
    }
}

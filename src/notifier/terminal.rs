use std::io::{self, Write};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::{Notice, Notifier, Prompt};

/// Notifier for a line-oriented terminal.
///
/// Notices are written to the output as they happen. A confirmation prints
/// its prompt and waits for the next input line, which the shell hands to
/// [`answer_pending`](Self::answer_pending). A newer prompt replaces an
/// unanswered one, declining it.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    pending: Mutex<Option<oneshot::Sender<bool>>>,
}

impl TerminalNotifier {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            pending: Mutex::new(None),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Write one line of output.
    pub fn print(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::debug!(error = %e, "Terminal write failed");
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Resolve the pending confirmation with `line`, if one is waiting.
    ///
    /// Returns `false` when nothing was pending, so the line is a command.
    pub fn answer_pending(&self, line: &str) -> bool {
        let Some(sender) = self.pending.lock().take() else {
            return false;
        };
        let confirmed = is_yes(line);
        if sender.send(confirmed).is_err() {
            tracing::trace!("Confirmation answer dropped (receiver gone)");
        }
        true
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        self.print(&notice.to_string());
    }

    fn confirm(&self, prompt: Prompt) -> oneshot::Receiver<bool> {
        let (sender, receiver) = oneshot::channel();
        if self.pending.lock().replace(sender).is_some() {
            tracing::debug!("Unanswered confirmation replaced by a newer prompt");
        }
        self.print(&format!("{} {} [y/N]", prompt.title, prompt.body));
        receiver
    }
}

fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

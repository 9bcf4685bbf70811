use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::catalog::ProductId;

/// Delete prompts waiting for an answer, oldest first.
#[derive(Default)]
pub(crate) struct PendingConfirmations {
    entries: Vec<(ProductId, oneshot::Receiver<bool>)>,
}

impl PendingConfirmations {
    pub(crate) fn push(&mut self, id: ProductId, receiver: oneshot::Receiver<bool>) {
        self.entries.push((id, receiver));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next answered prompt. A dropped sender resolves as declined.
    ///
    /// Never completes while empty.
    pub(crate) async fn next(&mut self) -> (ProductId, bool) {
        poll_fn(|cx| self.poll_next(cx)).await
    }

    fn poll_next(&mut self, cx: &mut Context<'_>) -> Poll<(ProductId, bool)> {
        for index in 0..self.entries.len() {
            let (_, receiver) = &mut self.entries[index];
            if let Poll::Ready(answer) = Pin::new(receiver).poll(cx) {
                let (id, _) = self.entries.remove(index);
                return Poll::Ready((id, answer.unwrap_or(false)));
            }
        }
        Poll::Pending
    }
}

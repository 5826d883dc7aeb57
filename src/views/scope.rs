// src/views/scope.rs
//! Lifetime of a view: requests started inside a scope are dropped once it
//! closes, so a late response can never touch a view that is gone.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Cancellation scope shared by every request a view issues.
///
/// Clones observe the same scope. Closing any clone closes all of them.
#[derive(Debug, Clone)]
pub struct ViewScope {
    closed: Arc<watch::Sender<bool>>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            closed: Arc::new(tx),
        }
    }

    /// Tears the scope down. Idempotent.
    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Runs `fut` unless the scope closes first.
    ///
    /// Returns `None` when the scope was already closed, closed while `fut`
    /// was pending, or closed by the time `fut` resolved.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_closed() {
            return None;
        }

        let rx = self.closed.subscribe();
        tokio::select! {
            biased;
            _ = wait_closed(rx) => None,
            out = fut => (!self.is_closed()).then_some(out),
        }
    }
}

async fn wait_closed(mut rx: watch::Receiver<bool>) {
    loop {
        let closed = *rx.borrow_and_update();
        if closed || rx.changed().await.is_err() {
            return;
        }
    }
}

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Cancels in-flight node calls, e.g. on shutdown
#[derive(Clone)]
pub struct CancelCoordinator {
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl CancelCoordinator {
    pub fn new() -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            cancel_tx: Arc::new(cancel_tx),
        }
    }

    /// Trigger cancellation (call this from signal handler)
    pub fn cancel(&self) {
        info!("Cancellation requested, aborting in-flight node calls");
        self.cancel_tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Create a guard for one request
    pub fn guard(&self) -> CancelGuard {
        CancelGuard {
            cancel_rx: self.cancel_tx.subscribe(),
        }
    }
}

impl Default for CancelCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request view of a [`CancelCoordinator`]
pub struct CancelGuard {
    cancel_rx: watch::Receiver<bool>,
}

impl CancelGuard {
    /// A guard no one can trigger
    pub fn detached() -> Self {
        let (_, cancel_rx) = watch::channel(false);
        Self { cancel_rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }

    /// Resolves once cancellation is requested; never resolves otherwise
    pub async fn cancelled(&mut self) {
        if self.cancel_rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // Coordinator gone without cancelling
            std::future::pending::<()>().await;
        }
    }
}

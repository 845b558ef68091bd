//! Refresh signal between the editor and the owner of the log
//! collection.
//!
//! The editor never mutates the shared collection; after a successful
//! submission it only signals that the collection should re-fetch. The
//! channel is unbounded because a refresh request must never block the
//! submission path.

use tokio::sync::mpsc;

/// Create a connected signal pair.
pub fn refresh_channel() -> (RefreshHandle, RefreshEvents) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RefreshHandle { tx }, RefreshEvents { rx })
}

/// Sending side, held by the editor. Clonable.
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl RefreshHandle {
    /// Ask the collection owner to re-fetch. If the owner is gone the
    /// request is silently dropped.
    pub fn request(&self) {
        let _ = self.tx.send(());
    }
}

/// Receiving side, held by whoever owns the displayed collection.
pub struct RefreshEvents {
    rx: mpsc::UnboundedReceiver<()>,
}

impl RefreshEvents {
    /// Wait for the next refresh request. Returns `false` when every
    /// handle has been dropped.
    pub async fn requested(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }

    /// Non-blocking check for a pending refresh request.
    pub fn try_requested(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

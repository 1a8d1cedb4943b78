//! Stop signal shared by `main`, the signal listener and the server.
//!
//! `HttpServer::run` holds a receiver and starts draining once `trigger`
//! fires. Integration tests trigger it when their server handle drops.

use tokio::sync::broadcast;

/// Cloneable handle that tells every subscribed server to stop.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify every subscriber. Returns how many were still listening.
    pub fn trigger(&self) -> usize {
        let notified = self.tx.send(()).unwrap_or(0);
        tracing::debug!(receivers = notified, "Shutdown triggered");
        notified
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

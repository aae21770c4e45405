//! In-process view-state bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ViewBus`] is the publish/subscribe hub between the browse controller
//! and its renderers. Ambient document-level events are deliberately not
//! used: consumers subscribe explicitly and receive every published
//! [`ViewState`] snapshot.

use tokio::sync::broadcast;

use crate::view::ViewState;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out hub for [`ViewState`] snapshots.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently observe every state change.
pub struct ViewBus {
    sender: broadcast::Sender<ViewState>,
}

impl ViewBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed snapshots are
    /// dropped and slow receivers will observe a `RecvError::Lagged`.
    /// Renderers only care about the latest snapshot, so lag is harmless.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a snapshot to all current subscribers.
    ///
    /// If there are no active subscribers the snapshot is silently
    /// dropped; the controller keeps the latest state queryable anyway.
    pub fn publish(&self, state: ViewState) {
        // Ignore the SendError; it only means there are zero receivers.
        let _ = self.sender.send(state);
    }

    /// Subscribe to all snapshots published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ViewState> {
        self.sender.subscribe()
    }
}

impl Default for ViewBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Event system for store notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! The original framework recomputed watchers through implicit dependency
//! tracking. Here the observer list is explicit: every state transition
//! emits a `StoreEvent` on a `tokio::sync::broadcast` channel, and anything
//! that wants to react subscribes.
//!
//! Key differences from implicit reactivity:
//! - Events are values, not tracked reads
//! - Subscribers receive copies (Clone)
//! - The set of events is an exhaustive enum, so reactions can't silently
//!   miss a transition

use std::time::Duration;

use tokio::sync::broadcast;

use crate::contact::ContactId;

/// Events emitted after store state transitions.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    // Session events
    /// The session logged in
    LoggedIn,
    /// The session logged out
    LoggedOut,

    // Cart events
    /// A line was added, merged, or removed
    CartChanged {
        total_quantity: u32,
        total_price: u64,
    },

    // Counter events
    /// The counter value changed
    CounterChanged { value: i64 },
    /// The counter crossed its threshold; a deferred reset should be
    /// scheduled by whoever drives the store
    ResetScheduled { generation: u64, delay: Duration },
    /// A scheduled reset fired and was accepted
    CounterReset { generation: u64 },

    // Widget events
    /// The name form's draft was confirmed
    NameConfirmed { name: String },
    /// The details paragraph was shown or hidden
    DetailsToggled { visible: bool },

    // Contact events
    /// A contact was added to the book
    ContactAdded(ContactId),
    /// A contact was removed from the book
    ContactRemoved(ContactId),
}

/// Event bus for broadcasting store events.
///
/// A broadcast channel allows multiple subscribers (frontends, timers,
/// tests) without coupling them to the store, and lagged receivers don't
/// block the sender.
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: StoreEvent) {
        // Ignore error if no receivers (not a problem)
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    ///
    /// Returns a receiver that will get all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Helper for processing events asynchronously, skipping over lag.
pub struct EventStream {
    receiver: broadcast::Receiver<StoreEvent>,
}

impl EventStream {
    /// Creates a new event stream.
    pub fn new(receiver: broadcast::Receiver<StoreEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<StoreEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event stream lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

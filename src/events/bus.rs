//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides the hand-off between the keyboard hook and the UI thread:
//! - The hook context publishes events via `EventPublisher::publish()`
//! - The UI thread drains them via `EventBus::drain()` after a wake message
//!
//! The channel is FIFO, so events are never reordered relative to emission.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::OsdEvent;

/// Event bus owned by the UI thread.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
///
/// # Example
///
/// ```
/// use lockosd::events::{EventBus, KeyStateEvent, OsdEvent, ToggleKey};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(OsdEvent::KeyChanged(KeyStateEvent::new(ToggleKey::CapsLock, true)));
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<OsdEvent>,
    receiver: Receiver<OsdEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<OsdEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds its own sender, so disconnection cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, oldest first.
    pub fn drain(&self) -> Vec<OsdEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<OsdEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus has been dropped (app shutting down) the send
    /// silently fails.
    pub fn publish(&self, event: OsdEvent) {
        let _ = self.sender.send(event);
    }
}

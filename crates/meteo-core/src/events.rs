//! Session event system.
//!
//! The session controller announces state changes and new readings over a
//! broadcast channel. This replaces the per-field change notifications the
//! original station used: there is one explicit "reading updated" event, and
//! a host that prefers polling can ignore the channel entirely and read the
//! session's current state directly.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use meteo_types::{Band, DeviceDescriptor, Reading};

/// Events emitted by the session controller.
///
/// All events are serializable for logging.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new event types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SessionEvent {
    /// Session connected to a device.
    Connected { device: DeviceDescriptor },
    /// Session disconnected; indicators were reset.
    Disconnected,
    /// A new reading was generated and classified.
    ReadingUpdated {
        reading: Reading,
        temperature_band: Band,
        humidity_band: Band,
    },
    /// The current reading was recorded to history.
    Recorded { reading: Reading },
    /// History was cleared.
    HistoryCleared { removed: usize },
}

/// Sender for session events.
pub type EventSender = broadcast::Sender<SessionEvent>;

/// Receiver for session events.
pub type EventReceiver = broadcast::Receiver<SessionEvent>;

/// Event dispatcher fanning session events out to any number of receivers.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    sender: EventSender,
}

impl EventDispatcher {
    /// Create a new dispatcher with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events.
    #[must_use]
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Send an event.
    pub fn send(&self, event: SessionEvent) {
        // Ignore error if no receivers
        let _ = self.sender.send(event);
    }

    /// Number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(100)
    }
}

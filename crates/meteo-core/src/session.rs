//! Session controller: the connect/disconnect/poll state machine.
//!
//! One `Session` instance owns all mutable monitor state. It is synchronous
//! and single-threaded by design: the host drives it from one event loop
//! (a periodic tick plus direct user actions), so no locking is needed.
//!
//! # Example
//!
//! ```
//! use meteo_core::Session;
//!
//! let mut session = Session::builder().seed(7).build();
//! let reading = session.connect(Some(1)).unwrap();
//! session.record().unwrap();
//! assert_eq!(session.history().len(), 1);
//! assert_eq!(session.history().latest(), Some(&reading));
//! session.disconnect();
//! ```

use time::OffsetDateTime;
use tracing::{debug, info};

use meteo_types::{DeviceDescriptor, IndicatorState, Reading};

use crate::devices::DeviceRegistry;
use crate::error::{Error, Result};
use crate::events::{EventDispatcher, EventReceiver, SessionEvent};
use crate::history::History;
use crate::simulator::ReadingSimulator;
use crate::thresholds::Thresholds;

/// Connection state of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No device connected; polling is a no-op.
    #[default]
    Disconnected,
    /// Connected to a device; each poll produces a reading.
    Connected,
}

/// Current visual state of both status indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicators {
    /// Temperature indicator.
    pub temperature: IndicatorState,
    /// Humidity indicator.
    pub humidity: IndicatorState,
}

/// The monitor's session controller.
///
/// Owns the device registry, the reading simulator, the current reading and
/// indicator states, and the history log. State changes are announced on a
/// broadcast event channel (see [`crate::events`]).
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    registry: DeviceRegistry,
    connected_device: Option<DeviceDescriptor>,
    simulator: ReadingSimulator,
    thresholds: Thresholds,
    current: Option<Reading>,
    indicators: Indicators,
    history: History,
    events: EventDispatcher,
}

impl Session {
    /// Create a session with the stock device registry, default thresholds,
    /// and an OS-seeded simulator.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for a customized session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Connect to the selected device.
    ///
    /// Generates and classifies one reading immediately, so the display is
    /// populated right after connecting. Connecting while already connected
    /// is allowed and simply regenerates the current reading.
    ///
    /// # Errors
    ///
    /// - [`Error::NoDeviceSelected`] if `selected` is `None`; no state change.
    /// - [`Error::UnknownDevice`] if the id is not in the registry; no state
    ///   change.
    pub fn connect(&mut self, selected: Option<u32>) -> Result<Reading> {
        let id = selected.ok_or(Error::NoDeviceSelected)?;
        let device = self
            .registry
            .get(id)
            .cloned()
            .ok_or(Error::UnknownDevice(id))?;

        info!(device = %device, "connected");
        self.state = SessionState::Connected;
        self.connected_device = Some(device.clone());
        self.events.send(SessionEvent::Connected { device });

        Ok(self.refresh_reading())
    }

    /// Disconnect from the device.
    ///
    /// Resets both indicators to [`IndicatorState::Neutral`] regardless of
    /// their prior band. The last reading stays available for display.
    pub fn disconnect(&mut self) {
        info!("disconnected");
        self.state = SessionState::Disconnected;
        self.connected_device = None;
        self.indicators = Indicators::default();
        self.events.send(SessionEvent::Disconnected);
    }

    /// Periodic tick from the host's timer.
    ///
    /// No-op while disconnected. While connected, generates a fresh reading
    /// and updates the current display and indicators, but never touches
    /// history; recording is always an explicit action.
    pub fn poll_tick(&mut self) -> Option<Reading> {
        match self.state {
            SessionState::Disconnected => None,
            SessionState::Connected => Some(self.refresh_reading()),
        }
    }

    /// Record the currently displayed reading to history (most recent first).
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] while disconnected; history is unchanged.
    pub fn record(&mut self) -> Result<Reading> {
        if self.state != SessionState::Connected {
            return Err(Error::NotConnected);
        }
        // Connected implies a current reading: connect generates one.
        let Some(reading) = self.current else {
            return Err(Error::NotConnected);
        };

        self.history.record(reading);
        debug!(total = self.history.len(), "reading recorded");
        self.events.send(SessionEvent::Recorded { reading });
        Ok(reading)
    }

    /// Empty the history log, returning how many entries were removed.
    ///
    /// Whether to ask the user for confirmation first is the host's call.
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        debug!(removed, "history cleared");
        self.events.send(SessionEvent::HistoryCleared { removed });
        removed
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The connected device, if any.
    #[must_use]
    pub fn device(&self) -> Option<&DeviceDescriptor> {
        self.connected_device.as_ref()
    }

    /// The currently displayed reading, if one has been generated.
    #[must_use]
    pub fn current_reading(&self) -> Option<&Reading> {
        self.current.as_ref()
    }

    /// Both indicator states.
    #[must_use]
    pub fn indicators(&self) -> Indicators {
        self.indicators
    }

    /// The history log.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The device registry.
    #[must_use]
    pub fn devices(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// The threshold tables in effect.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Subscribe to session events.
    #[must_use]
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    /// Generate, classify, and publish a new current reading.
    fn refresh_reading(&mut self) -> Reading {
        let reading = self.simulator.generate(OffsetDateTime::now_utc());
        let (temperature_band, humidity_band) = self.thresholds.classify_reading(&reading);

        self.current = Some(reading);
        self.indicators = Indicators {
            temperature: IndicatorState::Classified(temperature_band),
            humidity: IndicatorState::Classified(humidity_band),
        };

        debug!(
            temperature = reading.temperature,
            humidity = reading.humidity,
            ?temperature_band,
            ?humidity_band,
            "reading updated"
        );
        self.events.send(SessionEvent::ReadingUpdated {
            reading,
            temperature_band,
            humidity_band,
        });
        reading
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`Session`] with custom registry, thresholds, or simulator.
#[derive(Debug, Default)]
#[must_use]
pub struct SessionBuilder {
    registry: Option<DeviceRegistry>,
    thresholds: Option<Thresholds>,
    simulator: Option<ReadingSimulator>,
    event_capacity: Option<usize>,
}

impl SessionBuilder {
    /// Use a custom device registry.
    pub fn registry(mut self, registry: DeviceRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use custom threshold tables.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Use an explicit simulator.
    pub fn simulator(mut self, simulator: ReadingSimulator) -> Self {
        self.simulator = Some(simulator);
        self
    }

    /// Use a deterministically seeded simulator.
    pub fn seed(self, seed: u64) -> Self {
        self.simulator(ReadingSimulator::from_seed(seed))
    }

    /// Set the event channel capacity.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity);
        self
    }

    /// Build the session.
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            state: SessionState::Disconnected,
            registry: self.registry.unwrap_or_default(),
            connected_device: None,
            simulator: self.simulator.unwrap_or_default(),
            thresholds: self.thresholds.unwrap_or_default(),
            current: None,
            indicators: Indicators::default(),
            history: History::new(),
            events: EventDispatcher::new(self.event_capacity.unwrap_or(100)),
        }
    }
}

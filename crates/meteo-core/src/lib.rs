//! Behavior core for the meteo weather-station monitor.
//!
//! Everything here simulates a weather station: there is no hardware I/O,
//! no persistence, and no network. A pseudo-random generator stands in for
//! the sensor, and a small state machine models the connect/poll/record
//! cycle a monitoring UI drives.
//!
//! # Pieces
//!
//! - [`ReadingSimulator`]: timestamped synthetic temperature/humidity
//!   readings within fixed ranges.
//! - [`Thresholds`]: maps each value independently to a Normal / Warning /
//!   Alert band.
//! - [`Session`]: the connect/disconnect/poll/record state machine owning
//!   the current reading, indicator states, and history log.
//! - [`events`]: broadcast notifications for hosts that prefer push over
//!   polling the session state.
//!
//! # Quick Start
//!
//! ```
//! use meteo_core::Session;
//!
//! let mut session = Session::new();
//!
//! // Connect to the first stock device and read the initial values
//! let reading = session.connect(Some(1))?;
//! println!("{:.1} °C / {} %", reading.temperature, reading.humidity);
//!
//! // Tick as the host timer fires; record snapshots the user asks for
//! session.poll_tick();
//! session.record()?;
//! # Ok::<(), meteo_core::Error>(())
//! ```

pub mod devices;
pub mod display;
pub mod error;
pub mod events;
pub mod history;
pub mod session;
pub mod simulator;
pub mod thresholds;

pub use devices::DeviceRegistry;
pub use error::{Error, Result};
pub use events::{EventDispatcher, EventReceiver, EventSender, SessionEvent};
pub use history::History;
pub use session::{Indicators, Session, SessionBuilder, SessionState};
pub use simulator::ReadingSimulator;
pub use thresholds::{HumidityThresholds, TemperatureThresholds, Thresholds};

// Re-export the shared types crate
pub use meteo_types::{Band, DeviceDescriptor, IndicatorState, Reading};

//! Shared types for the meteo weather-station monitor.
//!
//! This crate holds the plain data types exchanged between the behavior core
//! (`meteo-core`) and its hosts: readings, status bands, indicator states,
//! and device descriptors.

pub mod types;

pub use types::{Band, DeviceDescriptor, IndicatorState, Reading};

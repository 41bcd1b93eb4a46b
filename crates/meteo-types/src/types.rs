//! Core data types for weather-station readings.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single simulated sensor reading.
///
/// Immutable once created. Temperature is in degrees Celsius, rounded to one
/// decimal place; humidity is a relative-humidity percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// When the reading was generated.
    pub timestamp: time::OffsetDateTime,
    /// Temperature in degrees Celsius, one decimal place.
    pub temperature: f64,
    /// Relative humidity percentage.
    pub humidity: u8,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            timestamp: time::OffsetDateTime::UNIX_EPOCH,
            temperature: 0.0,
            humidity: 0,
        }
    }
}

/// Status band for a classified sensor value.
///
/// Bands are ordered by severity: `Normal < Warning < Alert`, so threshold
/// comparisons like `band >= Band::Warning` work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Band {
    /// Value is within the comfortable range.
    Normal = 0,
    /// Value is drifting out of the comfortable range.
    Warning = 1,
    /// Value is outside both the normal and warning ranges.
    Alert = 2,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Normal => write!(f, "Normal"),
            Band::Warning => write!(f, "Warning"),
            Band::Alert => write!(f, "Alert"),
        }
    }
}

/// Visual state of a status indicator.
///
/// `Neutral` is the unclassified state shown before the first connect and
/// after a disconnect. It is deliberately not one of the three bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndicatorState {
    /// No classification to show.
    #[default]
    Neutral,
    /// Classified into a status band.
    Classified(Band),
}

impl IndicatorState {
    /// The band, if the indicator is classified.
    #[must_use]
    pub fn band(&self) -> Option<Band> {
        match self {
            IndicatorState::Neutral => None,
            IndicatorState::Classified(band) => Some(*band),
        }
    }
}

impl fmt::Display for IndicatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorState::Neutral => write!(f, "Neutral"),
            IndicatorState::Classified(band) => band.fmt(f),
        }
    }
}

/// Descriptor for a selectable (simulated) sensor device.
///
/// The device set is static and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceDescriptor {
    /// Stable numeric identifier.
    pub id: u32,
    /// Human-readable display name.
    pub name: String,
}

impl DeviceDescriptor {
    /// Create a new descriptor.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

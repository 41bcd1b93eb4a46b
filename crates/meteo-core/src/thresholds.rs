//! Threshold tables and status-band classification.
//!
//! Temperature and humidity are classified independently into one of three
//! bands. Classification is total: every input maps to exactly one band.
//!
//! # Example
//!
//! ```
//! use meteo_core::Thresholds;
//! use meteo_types::Band;
//!
//! let thresholds = Thresholds::default();
//! assert_eq!(thresholds.classify_temperature(22.0), Band::Normal);
//! assert_eq!(thresholds.classify_humidity(75), Band::Alert);
//! ```

use serde::{Deserialize, Serialize};

use meteo_types::{Band, Reading};

/// Temperature band boundaries in °C.
///
/// Normal is `[normal_low, normal_high]`; Warning extends the normal range
/// out to `[warning_low, normal_low)` below and `(normal_high, warning_high]`
/// above; everything else is Alert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    /// Lower bound of the warning range.
    pub warning_low: f64,
    /// Lower bound of the normal range.
    pub normal_low: f64,
    /// Upper bound of the normal range.
    pub normal_high: f64,
    /// Upper bound of the warning range.
    pub warning_high: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            warning_low: 15.0,
            normal_low: 18.0,
            normal_high: 25.0,
            warning_high: 30.0,
        }
    }
}

/// Humidity band boundaries in percent, same shape as the temperature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumidityThresholds {
    /// Lower bound of the warning range.
    pub warning_low: u8,
    /// Lower bound of the normal range.
    pub normal_low: u8,
    /// Upper bound of the normal range.
    pub normal_high: u8,
    /// Upper bound of the warning range.
    pub warning_high: u8,
}

impl Default for HumidityThresholds {
    fn default() -> Self {
        Self {
            warning_low: 30,
            normal_low: 40,
            normal_high: 60,
            warning_high: 70,
        }
    }
}

/// Band evaluator for sensor readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Temperature band table.
    pub temperature: TemperatureThresholds,
    /// Humidity band table.
    pub humidity: HumidityThresholds,
}

impl Thresholds {
    /// Create an evaluator from explicit tables.
    #[must_use]
    pub fn new(temperature: TemperatureThresholds, humidity: HumidityThresholds) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Classify a temperature in °C.
    #[must_use]
    pub fn classify_temperature(&self, t: f64) -> Band {
        let table = &self.temperature;
        if t >= table.normal_low && t <= table.normal_high {
            Band::Normal
        } else if (t >= table.warning_low && t < table.normal_low)
            || (t > table.normal_high && t <= table.warning_high)
        {
            Band::Warning
        } else {
            Band::Alert
        }
    }

    /// Classify a relative-humidity percentage.
    #[must_use]
    pub fn classify_humidity(&self, h: u8) -> Band {
        let table = &self.humidity;
        if h >= table.normal_low && h <= table.normal_high {
            Band::Normal
        } else if (h >= table.warning_low && h < table.normal_low)
            || (h > table.normal_high && h <= table.warning_high)
        {
            Band::Warning
        } else {
            Band::Alert
        }
    }

    /// Classify both values of a reading: `(temperature band, humidity band)`.
    #[must_use]
    pub fn classify_reading(&self, reading: &Reading) -> (Band, Band) {
        (
            self.classify_temperature(reading.temperature),
            self.classify_humidity(reading.humidity),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bands() {
        let t = Thresholds::default();
        assert_eq!(t.classify_temperature(22.0), Band::Normal);
        assert_eq!(t.classify_temperature(16.5), Band::Warning);
        assert_eq!(t.classify_temperature(28.0), Band::Warning);
        assert_eq!(t.classify_temperature(10.0), Band::Alert);
        assert_eq!(t.classify_temperature(35.0), Band::Alert);
        assert_eq!(t.classify_temperature(-10.0), Band::Alert);
    }

    #[test]
    fn test_temperature_boundaries() {
        let t = Thresholds::default();
        // Exact boundaries
        assert_eq!(t.classify_temperature(18.0), Band::Normal);
        assert_eq!(t.classify_temperature(25.0), Band::Normal);
        assert_eq!(t.classify_temperature(17.9), Band::Warning);
        assert_eq!(t.classify_temperature(25.1), Band::Warning);
        assert_eq!(t.classify_temperature(15.0), Band::Warning);
        assert_eq!(t.classify_temperature(30.0), Band::Warning);
        assert_eq!(t.classify_temperature(14.9), Band::Alert);
        assert_eq!(t.classify_temperature(30.1), Band::Alert);
    }

    #[test]
    fn test_humidity_bands() {
        let t = Thresholds::default();
        assert_eq!(t.classify_humidity(50), Band::Normal);
        assert_eq!(t.classify_humidity(35), Band::Warning);
        assert_eq!(t.classify_humidity(65), Band::Warning);
        assert_eq!(t.classify_humidity(20), Band::Alert);
        assert_eq!(t.classify_humidity(94), Band::Alert);
    }

    #[test]
    fn test_humidity_boundaries() {
        let t = Thresholds::default();
        assert_eq!(t.classify_humidity(40), Band::Normal);
        assert_eq!(t.classify_humidity(60), Band::Normal);
        assert_eq!(t.classify_humidity(39), Band::Warning);
        assert_eq!(t.classify_humidity(61), Band::Warning);
        assert_eq!(t.classify_humidity(30), Band::Warning);
        assert_eq!(t.classify_humidity(70), Band::Warning);
        assert_eq!(t.classify_humidity(29), Band::Alert);
        assert_eq!(t.classify_humidity(71), Band::Alert);
    }

    #[test]
    fn test_classification_is_total_over_generated_range() {
        // Every integer humidity and every tenth-degree temperature the
        // simulator can produce maps to exactly one band.
        let t = Thresholds::default();
        for h in 0..=100u8 {
            let _ = t.classify_humidity(h);
        }
        for tenths in -100..=400i32 {
            let _ = t.classify_temperature(f64::from(tenths) / 10.0);
        }
    }

    #[test]
    fn test_classify_reading() {
        let t = Thresholds::default();
        let reading = Reading {
            timestamp: time::OffsetDateTime::UNIX_EPOCH,
            temperature: 26.0,
            humidity: 45,
        };
        assert_eq!(t.classify_reading(&reading), (Band::Warning, Band::Normal));
    }

    #[test]
    fn test_custom_tables() {
        let t = Thresholds::new(
            TemperatureThresholds {
                warning_low: 0.0,
                normal_low: 5.0,
                normal_high: 10.0,
                warning_high: 15.0,
            },
            HumidityThresholds::default(),
        );
        assert_eq!(t.classify_temperature(7.0), Band::Normal);
        assert_eq!(t.classify_temperature(2.0), Band::Warning);
        assert_eq!(t.classify_temperature(20.0), Band::Alert);
    }

    #[test]
    fn test_thresholds_serialization_roundtrip() {
        let t = Thresholds::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: Thresholds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

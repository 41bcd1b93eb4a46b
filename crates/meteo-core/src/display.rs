//! Display-surface contract.
//!
//! The core pushes formatted strings to whatever renders them; it does not
//! own rendering.

use meteo_types::Reading;

use crate::session::SessionState;

/// Temperature display string, e.g. `"22.5 °C"`.
///
/// Always shows one decimal place, so whole-number readings render as
/// `"23.0 °C"` rather than `"23 °C"`. Readings carry one decimal of
/// precision and the fixed width keeps ticking displays stable.
#[must_use]
pub fn format_temperature(temperature: f64) -> String {
    format!("{temperature:.1} °C")
}

/// Humidity display string, e.g. `"48 %"`.
#[must_use]
pub fn format_humidity(humidity: u8) -> String {
    format!("{humidity} %")
}

/// Both value strings for a reading: `(temperature, humidity)`.
#[must_use]
pub fn format_reading(reading: &Reading) -> (String, String) {
    (
        format_temperature(reading.temperature),
        format_humidity(reading.humidity),
    )
}

/// Connection status label.
#[must_use]
pub fn connection_status(state: SessionState) -> &'static str {
    match state {
        SessionState::Connected => "Connected",
        SessionState::Disconnected => "Not connected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_format() {
        assert_eq!(format_temperature(22.5), "22.5 °C");
        assert_eq!(format_temperature(-10.0), "-10.0 °C");
        assert_eq!(format_temperature(23.0), "23.0 °C");
    }

    #[test]
    fn test_humidity_format() {
        assert_eq!(format_humidity(48), "48 %");
        assert_eq!(format_humidity(94), "94 %");
    }

    #[test]
    fn test_reading_format() {
        let reading = Reading {
            timestamp: time::OffsetDateTime::UNIX_EPOCH,
            temperature: 19.3,
            humidity: 55,
        };
        assert_eq!(
            format_reading(&reading),
            ("19.3 °C".to_string(), "55 %".to_string())
        );
    }

    #[test]
    fn test_connection_status() {
        assert_eq!(connection_status(SessionState::Connected), "Connected");
        assert_eq!(
            connection_status(SessionState::Disconnected),
            "Not connected"
        );
    }
}

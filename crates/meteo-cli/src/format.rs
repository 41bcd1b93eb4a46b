//! Output formatting for readings and history.

use anyhow::Result;
use serde_json::json;
use time::OffsetDateTime;

use meteo_core::display;
use meteo_types::{Band, Reading};

use crate::style;

/// Clock portion of a timestamp, `HH:MM:SS`.
fn clock(timestamp: OffsetDateTime) -> String {
    let t = timestamp.time();
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// One watch/read line:
/// `[12:04:31] 22.5 °C [Normal] | 48 % [Normal]`.
pub fn format_reading_line(
    reading: &Reading,
    temperature_band: Band,
    humidity_band: Band,
    no_color: bool,
) -> String {
    let (temp_text, hum_text) = display::format_reading(reading);
    format!(
        "[{}] {} [{}] | {} [{}]",
        clock(reading.timestamp),
        temp_text,
        style::band_label(temperature_band, no_color),
        hum_text,
        style::band_label(humidity_band, no_color),
    )
}

/// JSON object for a classified reading.
pub fn format_reading_json(
    reading: &Reading,
    temperature_band: Band,
    humidity_band: Band,
) -> Result<String> {
    let value = json!({
        "reading": reading,
        "temperature_band": temperature_band,
        "humidity_band": humidity_band,
    });
    Ok(serde_json::to_string(&value)?)
}

/// Multi-line dump of the history log, most recent first.
pub fn format_history(entries: &[Reading]) -> String {
    if entries.is_empty() {
        return "History: empty\n".to_string();
    }

    let mut out = format!("History ({} recorded):\n", entries.len());
    for reading in entries {
        let (temp_text, hum_text) = display::format_reading(reading);
        out.push_str(&format!(
            "  [{}] {} | {}\n",
            clock(reading.timestamp),
            temp_text,
            hum_text
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> Reading {
        Reading {
            timestamp: OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(45_296),
            temperature: 22.5,
            humidity: 48,
        }
    }

    #[test]
    fn test_reading_line_plain() {
        let line = format_reading_line(&reading(), Band::Normal, Band::Warning, true);
        assert_eq!(line, "[12:34:56] 22.5 °C [Normal] | 48 % [Warning]");
    }

    #[test]
    fn test_reading_json_fields() {
        let json = format_reading_json(&reading(), Band::Normal, Band::Alert).unwrap();
        assert!(json.contains("\"temperature\":22.5"));
        assert!(json.contains("\"temperature_band\":\"Normal\""));
        assert!(json.contains("\"humidity_band\":\"Alert\""));
    }

    #[test]
    fn test_history_empty() {
        assert_eq!(format_history(&[]), "History: empty\n");
    }

    #[test]
    fn test_history_lines() {
        let out = format_history(&[reading(), reading()]);
        assert!(out.starts_with("History (2 recorded):\n"));
        assert_eq!(out.matches("22.5 °C | 48 %").count(), 2);
    }
}

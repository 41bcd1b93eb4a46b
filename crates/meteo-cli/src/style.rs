//! Color styling for band indicators.

use owo_colors::OwoColorize;

use meteo_types::{Band, IndicatorState};

/// Color a band label: Normal is green, Warning yellow, Alert red.
pub fn band_label(band: Band, no_color: bool) -> String {
    let label = band.to_string();
    if no_color {
        return label;
    }
    match band {
        Band::Normal => label.green().to_string(),
        Band::Warning => label.yellow().to_string(),
        Band::Alert => label.red().to_string(),
    }
}

/// Label for an indicator, dimmed when neutral.
pub fn indicator_label(state: IndicatorState, no_color: bool) -> String {
    match state {
        IndicatorState::Neutral => {
            if no_color {
                "Neutral".to_string()
            } else {
                "Neutral".dimmed().to_string()
            }
        }
        IndicatorState::Classified(band) => band_label(band, no_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_label_plain() {
        assert_eq!(band_label(Band::Normal, true), "Normal");
        assert_eq!(band_label(Band::Alert, true), "Alert");
    }

    #[test]
    fn test_band_label_colored_contains_text() {
        assert!(band_label(Band::Warning, false).contains("Warning"));
    }

    #[test]
    fn test_indicator_label_neutral() {
        assert_eq!(
            indicator_label(IndicatorState::Neutral, true),
            "Neutral"
        );
    }
}

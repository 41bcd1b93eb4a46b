//! Read command implementation: one reading, then disconnect.

use anyhow::Result;
use meteo_core::Session;

use crate::cli::OutputFormat;
use crate::format::{format_reading_json, format_reading_line};

pub fn cmd_read(device: Option<u32>, format: OutputFormat, no_color: bool) -> Result<()> {
    let mut session = Session::new();

    // Default to the first registered device
    let selected = device.or_else(|| session.devices().first().map(|d| d.id));

    let reading = session.connect(selected)?;
    let (temperature_band, humidity_band) = session.thresholds().classify_reading(&reading);

    let line = match format {
        OutputFormat::Json => format_reading_json(&reading, temperature_band, humidity_band)?,
        OutputFormat::Text => {
            format_reading_line(&reading, temperature_band, humidity_band, no_color)
        }
    };
    println!("{line}");

    session.disconnect();
    Ok(())
}

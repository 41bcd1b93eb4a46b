//! Watch command implementation.
//!
//! Drives the session's poll loop: one task owns the session, ticks it on a
//! fixed interval (2 seconds by default), and handles Ctrl-C as the only
//! cancellation.

use std::time::Duration;

use anyhow::Result;
use meteo_core::{Session, display};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::format::{format_history, format_reading_json, format_reading_line};
use crate::style;

/// Arguments for the watch command.
pub struct WatchArgs {
    pub device: Option<u32>,
    pub interval: u64,
    pub count: u32,
    pub record_every: u32,
    pub clear_on_exit: bool,
    pub format: OutputFormat,
    pub no_color: bool,
}

pub async fn cmd_watch(args: WatchArgs) -> Result<()> {
    let mut session = Session::new();

    let selected = args
        .device
        .or_else(|| session.devices().first().map(|d| d.id));

    // Connect shows the first reading immediately
    let initial = session.connect(selected)?;
    let device = session
        .device()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    info!(device = %device, interval = args.interval, "watch started");

    eprintln!("Watching: {device}");
    if args.count > 0 {
        eprintln!(
            "Interval: {}s | Count: {} | Press Ctrl+C to stop",
            args.interval, args.count
        );
    } else {
        eprintln!("Interval: {}s | Press Ctrl+C to stop", args.interval);
    }
    eprintln!("{}", "-".repeat(50));

    print_reading(&session, &initial, args.format, args.no_color)?;

    let mut polled: u32 = 0;
    loop {
        // Check if we've reached the count limit
        if args.count > 0 && polled >= args.count {
            eprintln!("Completed {polled} readings.");
            break;
        }

        // Wait for the next tick with graceful shutdown support
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nShutting down...");
                break;
            }
            _ = tokio::time::sleep(Duration::from_secs(args.interval)) => {}
        }

        let Some(reading) = session.poll_tick() else {
            break;
        };
        polled += 1;
        print_reading(&session, &reading, args.format, args.no_color)?;

        // Polling never records on its own; this is the explicit action
        if args.record_every > 0 && polled % args.record_every == 0 {
            let recorded = session.record()?;
            debug!(
                temperature = recorded.temperature,
                humidity = recorded.humidity,
                "reading recorded"
            );
        }
    }

    if args.record_every > 0 {
        print!("{}", format_history(&session.history().to_vec()));
    }
    if args.clear_on_exit {
        let removed = session.clear_history();
        eprintln!("Cleared {removed} history entries.");
    }

    session.disconnect();
    info!(readings = polled, "watch stopped");
    eprintln!(
        "Status: {} | indicators: {} / {}",
        display::connection_status(session.state()),
        style::indicator_label(session.indicators().temperature, args.no_color),
        style::indicator_label(session.indicators().humidity, args.no_color),
    );
    Ok(())
}

fn print_reading(
    session: &Session,
    reading: &meteo_types::Reading,
    format: OutputFormat,
    no_color: bool,
) -> Result<()> {
    let (temperature_band, humidity_band) = session.thresholds().classify_reading(reading);
    let line = match format {
        OutputFormat::Json => format_reading_json(reading, temperature_band, humidity_band)?,
        OutputFormat::Text => {
            format_reading_line(reading, temperature_band, humidity_band, no_color)
        }
    };
    println!("{line}");
    Ok(())
}

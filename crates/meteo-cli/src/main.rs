mod cli;
mod commands;
mod format;
mod style;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{WatchArgs, cmd_devices, cmd_read, cmd_watch};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Devices => cmd_devices(),
        Commands::Read { device, format } => cmd_read(device, format, cli.no_color),
        Commands::Watch {
            device,
            interval,
            count,
            record_every,
            clear_on_exit,
            format,
        } => {
            cmd_watch(WatchArgs {
                device,
                interval,
                count,
                record_every,
                clear_on_exit,
                format,
                no_color: cli.no_color,
            })
            .await
        }
    }
}

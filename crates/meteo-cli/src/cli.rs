//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "meteo")]
#[command(version, about = "Simulated weather-station monitor", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the selectable (simulated) devices
    Devices,

    /// Connect, take one reading, and disconnect
    Read {
        /// Device id (defaults to the first device)
        #[arg(short, long)]
        device: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Monitor continuously on a fixed poll interval
    Watch {
        /// Device id (defaults to the first device)
        #[arg(short, long)]
        device: Option<u32>,

        /// Poll interval in seconds
        #[arg(short, long, default_value = "2")]
        interval: u64,

        /// Number of polled readings to take (0 for unlimited)
        #[arg(short, long, default_value = "0")]
        count: u32,

        /// Record every Nth polled reading to the history log (0 = never)
        #[arg(short, long, default_value = "0")]
        record_every: u32,

        /// Clear the history log after printing it on exit
        #[arg(long)]
        clear_on_exit: bool,

        /// Output format for reading lines
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

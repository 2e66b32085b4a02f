use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for drawerctl
#[derive(Parser, Debug)]
#[command(
    name = "drawerctl",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial trigger for BT-100U USB cash drawer kickers",
    long_about = "Opens a cash drawer by sending the kick-out frame over a USB-to-serial \
connection, with optional automatic discovery of the drawer's port on Linux."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the cash drawer
    Open(OpenArgs),
    /// Discover the drawer's serial port (Linux only)
    Discover,
    /// List available serial ports
    List,
    /// Display version information
    Version,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

/// Arguments for the open command
#[derive(ClapArgs, Debug)]
pub struct OpenArgs {
    /// Serial port path [default: /dev/ttyUSB0, or the configured port]
    #[arg(short, long)]
    pub port: Option<String>,

    /// Baud rate [default: 9600, or the configured rate]
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Discover the port instead of using --port (Linux only)
    #[arg(short, long)]
    pub auto: bool,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

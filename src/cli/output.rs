use crate::cli::args::OutputFormat;
use serde::Serialize;
use std::io;
use tabled::{Table, Tabled};

/// One row of the serial port listing.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PortListing {
    pub name: String,
    pub kind: String,
    pub vendor: String,
}

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_ports(&self, ports: &[PortListing]) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::DrawerError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_ports(&self, ports: &[PortListing]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                for port in ports {
                    println!("{} ({}, {})", port.name, port.kind, port.vendor);
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(ports)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !ports.is_empty() {
                    let table = Table::new(ports);
                    println!("{}", table);
                }
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

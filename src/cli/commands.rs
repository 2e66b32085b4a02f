use crate::cli::args::{Args, Command, OpenArgs};
use crate::cli::output::{ConsoleWriter, OutputWriter, PortListing};
use crate::core::drawer::DrawerSession;
use crate::domain::config::DrawerctlConfig;
use crate::domain::error::DrawerError;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::discovery;
use crate::infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Execute CLI command
pub fn execute_command(args: Args) -> Result<(), DrawerError> {
    let writer = ConsoleWriter::new(args.output.clone());

    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(Path::new(config_path))?
    } else {
        config_manager.load_config()?
    };

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose).map_err(|e| {
            DrawerError::Config {
                message: format!("Failed to initialize logging: {}", e),
            }
        })?;
    }

    match args.command {
        Command::Open(open_args) => execute_open(open_args, &writer, &config),
        Command::Discover => execute_discover(&writer, &config),
        Command::List => execute_list(&writer),
        Command::Version => {
            writer.write_message(&format!("drawerctl {}", crate::cli::version()))?;
            Ok(())
        }
    }
}

fn execute_open(
    args: OpenArgs,
    writer: &ConsoleWriter,
    config: &DrawerctlConfig,
) -> Result<(), DrawerError> {
    let port = if args.auto {
        discovery::discover_port_for_vendor(&config.discovery.vendor)?
    } else {
        args.port.unwrap_or_else(|| config.serial.port.clone())
    };
    let baud = args.baud.unwrap_or(config.serial.baud);

    let mut session = DrawerSession::open(&port, baud)?;
    let trigger_result = session.trigger_open();
    let close_result = session.close();
    trigger_result?;
    close_result?;

    info!(port = %port, baud, "cash drawer triggered");
    writer.write_message("Cash drawer opened successfully")?;
    Ok(())
}

fn execute_discover(writer: &ConsoleWriter, config: &DrawerctlConfig) -> Result<(), DrawerError> {
    let port = discovery::discover_port_for_vendor(&config.discovery.vendor)?;
    writer.write_message(&port)?;
    Ok(())
}

fn execute_list(writer: &ConsoleWriter) -> Result<(), DrawerError> {
    let ports = serialport::available_ports()
        .map_err(|e| DrawerError::Enumeration(e.to_string()))?;

    let listings: Vec<PortListing> = ports
        .iter()
        .map(|port| {
            let (kind, vendor) = match &port.port_type {
                serialport::SerialPortType::UsbPort(usb) => (
                    "usb".to_string(),
                    usb.manufacturer.clone().unwrap_or_else(|| "-".to_string()),
                ),
                serialport::SerialPortType::BluetoothPort => {
                    ("bluetooth".to_string(), "-".to_string())
                }
                serialport::SerialPortType::PciPort => ("pci".to_string(), "-".to_string()),
                serialport::SerialPortType::Unknown => ("unknown".to_string(), "-".to_string()),
            };
            PortListing {
                name: port.port_name.clone(),
                kind,
                vendor,
            }
        })
        .collect();

    writer.write_ports(&listings)?;
    Ok(())
}

use crate::domain::error::{DrawerError, DrawerResult};
use crate::infrastructure::discovery::record::DeviceRecord;
use crate::infrastructure::discovery::{PortEnumerator, ATTR_DEVNAME, ATTR_SUBSYSTEM, ATTR_VENDOR};

/// Enumeration source backed by the operating system's serial device
/// registry, via `serialport::available_ports` (udev on Linux).
pub struct SystemEnumerator;

impl SystemEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PortEnumerator for SystemEnumerator {
    fn enumerate(&self) -> DrawerResult<Vec<DeviceRecord>> {
        let ports = serialport::available_ports()
            .map_err(|e| DrawerError::Enumeration(e.to_string()))?;

        let records = ports
            .iter()
            .map(|port| {
                let mut record = DeviceRecord::new();
                if let Some(name) = port.port_name.strip_prefix("/dev/") {
                    record = record.with_attr(ATTR_DEVNAME, name);
                    if name.starts_with("tty") {
                        record = record.with_attr(ATTR_SUBSYSTEM, "tty");
                    }
                }
                // Only USB ports carry a vendor; absent keys never match.
                if let serialport::SerialPortType::UsbPort(usb) = &port.port_type {
                    if let Some(manufacturer) = &usb.manufacturer {
                        record = record.with_attr(ATTR_VENDOR, &encode_vendor(manufacturer));
                    }
                }
                record
            })
            .collect();

        Ok(records)
    }
}

/// udev encodes attribute values with underscores in place of whitespace
/// ("Prolific Technology Inc." becomes "Prolific_Technology_Inc.").
fn encode_vendor(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

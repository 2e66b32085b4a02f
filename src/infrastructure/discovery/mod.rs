// Discovery module - Locating the drawer's serial port by USB attributes
pub mod matcher;
pub mod record;
#[cfg(target_os = "linux")]
pub mod system;

pub use matcher::{MatchRule, MatchSet, MatchStrategy};
pub use record::DeviceRecord;
#[cfg(target_os = "linux")]
pub use system::SystemEnumerator;

use crate::domain::error::{DrawerError, DrawerResult};
use tracing::debug;

/// Directory prefix device names resolve under.
pub const DEVICE_DIR: &str = "/dev/";

/// Vendor identifier reported by the BT-100U's USB-to-serial adapter.
pub const DRAWER_VENDOR: &str = "Prolific_Technology_Inc.";

pub const ATTR_VENDOR: &str = "ID_VENDOR";
pub const ATTR_SUBSYSTEM: &str = "SUBSYSTEM";
pub const ATTR_DEVNAME: &str = "DEVNAME";

/// Source of currently enumerated devices. Implemented by the platform
/// registry where available and by fakes in tests.
pub trait PortEnumerator {
    fn enumerate(&self) -> DrawerResult<Vec<DeviceRecord>>;
}

/// Locate the drawer's port path using the platform device registry.
///
/// Only Linux exposes the registry this relies on; elsewhere the caller gets
/// `DiscoveryUnsupported` and must supply a port path manually.
pub fn discover_port() -> DrawerResult<String> {
    discover_port_for_vendor(DRAWER_VENDOR)
}

/// Same as `discover_port`, matching a caller-supplied vendor identifier.
#[cfg(target_os = "linux")]
pub fn discover_port_for_vendor(vendor: &str) -> DrawerResult<String> {
    discover_port_with(&SystemEnumerator::new(), vendor)
}

#[cfg(not(target_os = "linux"))]
pub fn discover_port_for_vendor(_vendor: &str) -> DrawerResult<String> {
    Err(DrawerError::DiscoveryUnsupported)
}

/// Locate the drawer's port path from an explicit enumeration source.
///
/// Filters the enumerated records down to USB serial devices reporting the
/// given vendor, then takes the first match in enumeration order.
pub fn discover_port_with(source: &dyn PortEnumerator, vendor: &str) -> DrawerResult<String> {
    let records = source.enumerate()?;
    debug!(count = records.len(), "enumerated serial devices");

    let mut rules = MatchSet::new(MatchStrategy::And);
    rules.add_rule(MatchRule::new(ATTR_VENDOR, vendor));
    rules.add_rule(MatchRule::new(ATTR_SUBSYSTEM, "tty"));

    let matched = rules.filter(&records);
    let first = matched.first().ok_or(DrawerError::NotFound)?;
    let name = first.get(ATTR_DEVNAME).ok_or(DrawerError::NotFound)?;

    let path = format!("{}{}", DEVICE_DIR, name);
    debug!(port = %path, matches = matched.len(), "drawer port discovered");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEnumerator {
        records: Vec<DeviceRecord>,
    }

    impl PortEnumerator for FakeEnumerator {
        fn enumerate(&self) -> DrawerResult<Vec<DeviceRecord>> {
            Ok(self.records.clone())
        }
    }

    struct FailingEnumerator;

    impl PortEnumerator for FailingEnumerator {
        fn enumerate(&self) -> DrawerResult<Vec<DeviceRecord>> {
            Err(DrawerError::Enumeration("udev unavailable".to_string()))
        }
    }

    fn drawer_record(devname: &str) -> DeviceRecord {
        DeviceRecord::new()
            .with_attr(ATTR_VENDOR, DRAWER_VENDOR)
            .with_attr(ATTR_SUBSYSTEM, "tty")
            .with_attr(ATTR_DEVNAME, devname)
    }

    #[test]
    fn test_discover_no_devices() {
        let source = FakeEnumerator { records: vec![] };
        let err = discover_port_with(&source, DRAWER_VENDOR).unwrap_err();
        assert!(matches!(err, DrawerError::NotFound));
    }

    #[test]
    fn test_discover_no_matching_devices() {
        let source = FakeEnumerator {
            records: vec![
                DeviceRecord::new()
                    .with_attr(ATTR_VENDOR, "FTDI")
                    .with_attr(ATTR_SUBSYSTEM, "tty")
                    .with_attr(ATTR_DEVNAME, "ttyUSB0"),
                // Right vendor, wrong subsystem.
                DeviceRecord::new()
                    .with_attr(ATTR_VENDOR, DRAWER_VENDOR)
                    .with_attr(ATTR_SUBSYSTEM, "usb")
                    .with_attr(ATTR_DEVNAME, "bus/usb/001/004"),
            ],
        };
        let err = discover_port_with(&source, DRAWER_VENDOR).unwrap_err();
        assert!(matches!(err, DrawerError::NotFound));
    }

    #[test]
    fn test_discover_single_match() {
        let source = FakeEnumerator {
            records: vec![drawer_record("ttyUSB0")],
        };
        let port = discover_port_with(&source, DRAWER_VENDOR).unwrap();
        assert_eq!(port, "/dev/ttyUSB0");
    }

    #[test]
    fn test_discover_multiple_matches_takes_first() {
        let source = FakeEnumerator {
            records: vec![
                DeviceRecord::new()
                    .with_attr(ATTR_VENDOR, "FTDI")
                    .with_attr(ATTR_SUBSYSTEM, "tty")
                    .with_attr(ATTR_DEVNAME, "ttyUSB0"),
                drawer_record("ttyUSB1"),
                drawer_record("ttyUSB2"),
            ],
        };
        // Stable across repeated runs with the same input order.
        for _ in 0..3 {
            let port = discover_port_with(&source, DRAWER_VENDOR).unwrap();
            assert_eq!(port, "/dev/ttyUSB1");
        }
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let err = discover_port_with(&FailingEnumerator, DRAWER_VENDOR).unwrap_err();
        assert!(matches!(err, DrawerError::Enumeration(_)));
    }

    #[test]
    fn test_custom_vendor_match() {
        let source = FakeEnumerator {
            records: vec![DeviceRecord::new()
                .with_attr(ATTR_VENDOR, "Acme_Peripherals")
                .with_attr(ATTR_SUBSYSTEM, "tty")
                .with_attr(ATTR_DEVNAME, "ttyACM0")],
        };
        let port = discover_port_with(&source, "Acme_Peripherals").unwrap();
        assert_eq!(port, "/dev/ttyACM0");
    }
}

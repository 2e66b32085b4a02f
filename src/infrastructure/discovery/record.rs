use std::collections::HashMap;

/// Attribute snapshot of one enumerated device.
///
/// Records are read-only once built and live only for the duration of a
/// discovery call.
#[derive(Debug, Clone, Default)]
pub struct DeviceRecord {
    attrs: HashMap<String, String>,
}

impl DeviceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup() {
        let record = DeviceRecord::new()
            .with_attr("ID_VENDOR", "Prolific_Technology_Inc.")
            .with_attr("DEVNAME", "ttyUSB0");

        assert_eq!(record.get("ID_VENDOR"), Some("Prolific_Technology_Inc."));
        assert_eq!(record.get("DEVNAME"), Some("ttyUSB0"));
        assert_eq!(record.get("SUBSYSTEM"), None);
    }
}

use serde::{Deserialize, Serialize};

/// drawerctl configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawerctlConfig {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,
    /// Serial connection settings
    #[serde(default)]
    pub serial: SerialSettings,
    /// Device discovery settings
    #[serde(default)]
    pub discovery: DiscoverySettings,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Serial connection settings for the drawer trigger device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialSettings {
    /// Serial port path
    #[serde(default = "default_port")]
    pub port: String,
    /// Baud rate
    #[serde(default = "default_baud")]
    pub baud: u32,
}

/// Device discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// Vendor identifier the drawer's USB adapter reports (udev encoding)
    #[serde(default = "default_vendor")]
    pub vendor: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> String {
    "/dev/ttyUSB0".to_string()
}

fn default_baud() -> u32 {
    9600
}

fn default_vendor() -> String {
    "Prolific_Technology_Inc.".to_string()
}

impl Default for DrawerctlConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            serial: SerialSettings::default(),
            discovery: DiscoverySettings::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud: default_baud(),
        }
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            vendor: default_vendor(),
        }
    }
}

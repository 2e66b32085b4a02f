//! drawerctl Library
//!
//! Cash drawer trigger library for BT-100U-class USB serial kickers,
//! providing the serial session lifecycle and Linux port discovery.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::cli::version;
pub use crate::core::drawer::{DrawerSession, OPEN_FRAME};
pub use crate::domain::config::DrawerctlConfig;
pub use crate::domain::error::{DrawerError, DrawerResult};
pub use crate::infrastructure::discovery::{
    discover_port, discover_port_with, DeviceRecord, MatchRule, MatchSet, MatchStrategy,
    PortEnumerator,
};

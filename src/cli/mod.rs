// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Command, OutputFormat};
pub use commands::execute_command;
pub use output::OutputWriter;

/// Version string, overridable at build time with DRAWERCTL_VERSION.
pub fn version() -> &'static str {
    option_env!("DRAWERCTL_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Initialize the logging system.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to the
/// crate and warnings and errors pass through from everywhere else.
/// `verbose` raises the crate level to debug. Safe to call more than once;
/// later calls are no-ops.
pub fn init_logging(level: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let crate_level = if verbose { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("drawerctl={},warn", crate_level)));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init();

    // A second init in the same process is fine.
    if result.is_ok() {
        tracing::debug!("drawerctl logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init() {
        assert!(init_logging("info", false).is_ok());
        // Re-initialization must not fail.
        assert!(init_logging("debug", true).is_ok());
    }
}

use thiserror::Error;

/// drawerctl unified error type
#[derive(Error, Debug)]
pub enum DrawerError {
    #[error("Failed to open serial port {port}: {source}")]
    Connection {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Short write: drawer accepted {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("Serial port already closed")]
    AlreadyClosed,

    #[error("Device enumeration failed: {0}")]
    Enumeration(String),

    #[error("No matching cash drawer device found")]
    NotFound,

    #[error("Port discovery is not supported on this platform")]
    DiscoveryUnsupported,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),
}

pub type DrawerResult<T> = Result<T, DrawerError>;

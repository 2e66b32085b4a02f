use crate::core::drawer::frame::{self, OPEN_FRAME};
use crate::domain::error::{DrawerError, DrawerResult};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// A live serial connection to the cash drawer trigger device.
///
/// The session exclusively owns its port handle. `close` releases the handle;
/// any operation after that fails with `AlreadyClosed` rather than silently
/// doing nothing, so double-release bugs surface at the call site.
pub struct DrawerSession {
    sink: Option<Box<dyn Write + Send>>,
    path: String,
    baud: u32,
}

impl DrawerSession {
    /// Open the serial port at the given path and baud rate with the fixed
    /// 8N1 framing the trigger device expects.
    pub fn open(path: &str, baud: u32) -> DrawerResult<Self> {
        let port = serialport::new(path, baud)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(100))
            .open()
            .map_err(|e| DrawerError::Connection {
                port: path.to_string(),
                source: e,
            })?;

        info!(port = path, baud, "serial port opened");

        Ok(Self {
            sink: Some(Box::new(port)),
            path: path.to_string(),
            baud,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_sink(sink: Box<dyn Write + Send>, path: &str, baud: u32) -> Self {
        Self {
            sink: Some(sink),
            path: path.to_string(),
            baud,
        }
    }

    /// Send the kick-out frame, energizing the drawer's release solenoid.
    ///
    /// No retries and no acknowledgment: the device never answers, and a
    /// failed or short write is surfaced immediately for the caller to decide.
    pub fn trigger_open(&mut self) -> DrawerResult<()> {
        let sink = self.sink.as_mut().ok_or(DrawerError::AlreadyClosed)?;
        frame::write_frame(sink.as_mut())?;
        debug!(frame = %hex::encode(OPEN_FRAME), port = %self.path, "kick-out frame sent");
        Ok(())
    }

    /// Release the port handle. A second close fails with `AlreadyClosed`.
    pub fn close(&mut self) -> DrawerResult<()> {
        match self.sink.take() {
            Some(sink) => {
                drop(sink);
                info!(port = %self.path, "serial port closed");
                Ok(())
            }
            None => Err(DrawerError::AlreadyClosed),
        }
    }

    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn baud(&self) -> u32 {
        self.baud
    }
}

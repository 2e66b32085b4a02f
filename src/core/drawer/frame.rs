use crate::domain::error::{DrawerError, DrawerResult};
use std::io::Write;

/// ESC p 0 48 — the kick-out sequence the BT-100U trigger recognizes as "open".
pub const OPEN_FRAME: [u8; 4] = [0x1B, 0x70, 0x00, 0x30];

/// Write the kick-out frame to a sink, verifying the accepted byte count.
///
/// A truncated frame may leave the drawer in an undefined state, so a write
/// that accepts fewer than all 4 bytes is an error, never a silent success.
pub(crate) fn write_frame<W: Write + ?Sized>(sink: &mut W) -> DrawerResult<()> {
    let written = sink.write(&OPEN_FRAME)?;
    if written != OPEN_FRAME.len() {
        return Err(DrawerError::ShortWrite {
            written,
            expected: OPEN_FRAME.len(),
        });
    }
    sink.flush()?;
    Ok(())
}

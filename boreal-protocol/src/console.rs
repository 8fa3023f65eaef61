//! AT console line formats.
//!
//! The node only writes to the console; parsing lives in the console
//! driver. Line formats match what the deployed gateway tooling greps
//! for, so they are fixed here next to the wire format:
//!
//! - `$SEND: <hex>` after every radio transmission
//! - `$STATUS: "<Name>",<value>` (value field empty when no sample yet)
//! - `$JOIN_OK` / `$JOIN_ERROR` on modem join results

use core::fmt::Write;

use heapless::String;

use crate::packet::{frame_hex, REPORT_LEN};

/// Emitted when the modem joins the network
pub const JOIN_OK: &str = "$JOIN_OK";

/// Emitted when the modem fails to join the network
pub const JOIN_ERROR: &str = "$JOIN_ERROR";

/// Longest line the node ever emits
pub const MAX_LINE_LEN: usize = 48;

/// A rendered console line
pub type Line = String<MAX_LINE_LEN>;

/// Render the transmission echo for an encoded frame
pub fn send_line(frame: &[u8; REPORT_LEN]) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "$SEND: {}", frame_hex(frame));
    line
}

/// Render a status line for one measured quantity
///
/// The value prints with one decimal place; a missing average leaves
/// the field empty rather than printing a placeholder.
pub fn status_line(name: &str, value: Option<f32>) -> Line {
    let mut line = Line::new();
    match value {
        Some(v) => {
            let _ = write!(line, "$STATUS: \"{}\",{:.1}", name, v);
        }
        None => {
            let _ = write!(line, "$STATUS: \"{}\",", name);
        }
    }
    line
}

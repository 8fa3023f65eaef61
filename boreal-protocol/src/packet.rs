//! Report frame encoding and decoding.
//!
//! Frame format (always exactly 4 bytes):
//! - HEADER (1 byte): report cause, see [`Header`]
//! - VOLTAGE (1 byte): `ceil(volts * 10)`, or 0xFF when no sample exists
//! - TEMPERATURE (2 bytes): big-endian two's-complement `trunc(celsius * 10)`,
//!   or 0xFFFF when no sample exists
//!
//! The voltage sentinel is reachable by a legitimate reading at or above
//! 25.5 V; such readings decode as absent. This is part of the deployed
//! wire contract and must not be changed unilaterally.

use core::fmt::Write;

use heapless::String;

/// Length of an encoded report in bytes
pub const REPORT_LEN: usize = 4;

/// Sentinel for a missing voltage sample
const VOLTAGE_ABSENT: u8 = 0xFF;

/// Sentinel for a missing temperature sample
const TEMPERATURE_ABSENT: [u8; 2] = [0xFF, 0xFF];

/// Errors that can occur when decoding a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Input is not exactly [`REPORT_LEN`] bytes
    InvalidLength,
    /// Header byte does not name a known report cause
    InvalidHeader,
}

/// Report cause carried in the first byte of every frame
///
/// Starts at `Boot`, is overwritten by button events, and is consumed
/// (reset to `Update`) by each transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Header {
    /// First report after power-on
    #[default]
    Boot = 0x00,
    /// Ordinary periodic report
    Update = 0x01,
    /// Report caused by a button click
    ButtonClick = 0x02,
    /// Report caused by a button hold
    ButtonHold = 0x03,
}

impl Header {
    /// Parse a header byte
    pub fn from_byte(byte: u8) -> Result<Self, PacketError> {
        match byte {
            0x00 => Ok(Header::Boot),
            0x01 => Ok(Header::Update),
            0x02 => Ok(Header::ButtonClick),
            0x03 => Ok(Header::ButtonHold),
            _ => Err(PacketError::InvalidHeader),
        }
    }
}

/// A report assembled from the current header and sample averages
///
/// Constructed fresh on every send attempt; `None` fields encode as
/// sentinel bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Report cause
    pub header: Header,
    /// Averaged battery voltage in volts
    pub voltage: Option<f32>,
    /// Averaged temperature in degrees Celsius
    pub temperature: Option<f32>,
}

/// Ceiling of `v` as an integer, without a float runtime
///
/// `as` casts truncate toward zero, so positive fractions need a bump.
fn ceil_i32(v: f32) -> i32 {
    let truncated = v as i32;
    if v > truncated as f32 {
        truncated + 1
    } else {
        truncated
    }
}

impl Report {
    /// Encode into the 4-byte wire frame
    ///
    /// Always well-formed; missing values become sentinels.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let voltage_byte = match self.voltage {
            // Saturates at 0xFF, so >= 25.5 V lands on the sentinel.
            Some(v) => ceil_i32(v * 10.0).clamp(0, 0xFF) as u8,
            None => VOLTAGE_ABSENT,
        };

        let temperature_bytes = match self.temperature {
            Some(t) => ((t * 10.0) as i16).to_be_bytes(),
            None => TEMPERATURE_ABSENT,
        };

        [
            self.header as u8,
            voltage_byte,
            temperature_bytes[0],
            temperature_bytes[1],
        ]
    }

    /// Decode a wire frame back into a report
    ///
    /// Sentinel bytes map to `None`. Note 0xFFFF doubles as -0.1 C
    /// scaled; it is treated as absent, matching the gateway decoder.
    pub fn decode(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() != REPORT_LEN {
            return Err(PacketError::InvalidLength);
        }

        let header = Header::from_byte(bytes[0])?;

        let voltage = if bytes[1] == VOLTAGE_ABSENT {
            None
        } else {
            Some(bytes[1] as f32 / 10.0)
        };

        let temperature = if bytes[2..4] == TEMPERATURE_ABSENT {
            None
        } else {
            Some(i16::from_be_bytes([bytes[2], bytes[3]]) as f32 / 10.0)
        };

        Ok(Self {
            header,
            voltage,
            temperature,
        })
    }
}

/// Render a frame as lowercase hex pairs for the `$SEND:` echo
pub fn frame_hex(frame: &[u8; REPORT_LEN]) -> String<{ REPORT_LEN * 2 }> {
    let mut out = String::new();
    for byte in frame {
        // Cannot fail: capacity is exactly two chars per byte
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

//! Wire format and diagnostic output for the Boreal sensor node
//!
//! The node periodically uplinks a fixed 4-byte report over LoRa and
//! echoes every transmission (plus modem join results and status
//! queries) on the AT console. This crate owns both byte layouts:
//!
//! - [`packet`]: the 4-byte report frame with sentinel-encoded
//!   missing values
//! - [`console`]: the `$SEND` / `$STATUS` / `$JOIN_*` line formats

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod packet;

pub use packet::{Header, PacketError, Report, REPORT_LEN};

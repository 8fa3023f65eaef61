//! Radio transport trait and status events

use boreal_protocol::REPORT_LEN;

/// Status changes reported by the radio modem driver
///
/// The join/session/transport state machine lives in the driver; the
/// core only reacts to these notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioEvent {
    /// Modem reported a fault
    Error,
    /// Uplink transmission started
    SendStart,
    /// Uplink transmission finished
    SendDone,
    /// Modem is idle and able to accept a payload
    Ready,
    /// Network join succeeded
    JoinSuccess,
    /// Network join failed
    JoinError,
}

/// The LoRa modem, as far as the core is concerned
pub trait RadioTransport {
    /// True when the modem can accept a new payload right now
    fn is_ready(&self) -> bool;

    /// Hand a complete report frame to the modem
    ///
    /// Only called after [`is_ready`](Self::is_ready) returned true
    /// on the same scheduler pass; the frame is immutable once
    /// handed over.
    fn send(&mut self, frame: &[u8; REPORT_LEN]);
}

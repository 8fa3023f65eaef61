//! Status indicator (LED) trait

/// Indicator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Dark
    #[default]
    Off,
    /// Steady on
    On,
    /// Blink the given number of times, then stop
    Blink(u8),
    /// Fast continuous blink; the persistent warning pattern
    BlinkFast,
}

/// A single LED
///
/// The node drives two of these: the board status LED (radio health)
/// and the LCD module LED (press/transmission feedback).
pub trait StatusIndicator {
    /// Switch to a mode; `BlinkFast` persists until replaced
    fn set(&mut self, mode: LedMode);

    /// One-shot pulse for the given duration
    fn pulse(&mut self, duration_ms: u32);
}

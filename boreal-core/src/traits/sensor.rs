//! Measurement source traits

/// A temperature probe with an asynchronous conversion cycle
///
/// `start_conversion` only kicks the hardware off; the reading
/// arrives later as a `TemperatureUpdate` event, and only when the
/// driver has confirmed it valid.
pub trait TemperatureSource {
    /// Begin a conversion. Returns false when the probe is busy;
    /// the caller retries on a later scheduler pass.
    fn start_conversion(&mut self) -> bool;
}

/// The battery voltage monitor
///
/// Same conversion contract as [`TemperatureSource`]; the reading
/// arrives as a `BatteryUpdate` event.
pub trait VoltageSource {
    /// Begin a measurement. Returns false when the monitor is busy.
    fn start_conversion(&mut self) -> bool;
}

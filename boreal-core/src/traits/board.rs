//! Board aggregation trait
//!
//! Bundles the collaborator traits behind associated types so the
//! node takes a single generic parameter. A firmware build plugs in
//! the real drivers; tests plug in a fake board and drive the
//! logical clock by hand.

use super::{Console, Display, RadioTransport, StatusIndicator, SystemClock};
use super::{TemperatureSource, VoltageSource};

/// Everything the node needs from the hardware
pub trait Board {
    /// Temperature probe
    type Temperature: TemperatureSource;
    /// Battery voltage monitor
    type Voltage: VoltageSource;
    /// LoRa modem
    type Radio: RadioTransport;
    /// Low-power LCD
    type Display: Display;
    /// PLL control for rendering
    type Clock: SystemClock;
    /// LED type (used for both indicators)
    type Indicator: StatusIndicator;
    /// AT console write side
    type Console: Console;

    fn temperature(&mut self) -> &mut Self::Temperature;
    fn voltage(&mut self) -> &mut Self::Voltage;
    fn radio(&mut self) -> &mut Self::Radio;
    fn display(&mut self) -> &mut Self::Display;
    fn clock(&mut self) -> &mut Self::Clock;
    /// Board status LED: radio health and boot feedback
    fn status_led(&mut self) -> &mut Self::Indicator;
    /// LCD module LED: press and transmission feedback
    fn lcd_led(&mut self) -> &mut Self::Indicator;
    fn console(&mut self) -> &mut Self::Console;
}

//! Hardware abstraction traits
//!
//! These traits define the interface between the orchestration logic
//! and the peripheral drivers. Drivers deliver their asynchronous
//! results (conversion complete, radio status change, button press)
//! as [`NodeEvent`](crate::node::NodeEvent)s on the single scheduler
//! thread; the traits here only cover what the core actively calls.

pub mod board;
pub mod console;
pub mod display;
pub mod indicator;
pub mod radio;
pub mod sensor;

pub use board::Board;
pub use console::Console;
pub use display::{Display, SystemClock};
pub use indicator::{LedMode, StatusIndicator};
pub use radio::{RadioEvent, RadioTransport};
pub use sensor::{TemperatureSource, VoltageSource};

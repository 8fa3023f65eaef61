//! Board-agnostic orchestration logic for the Boreal sensor node
//!
//! This crate contains the application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensors, radio, display, console)
//! - Activity state machine (sleep/active with idle timeout)
//! - Cooperative task scheduler over a logical millisecond clock
//! - Rolling-average sample streams
//! - The node itself: event routing, measurement tasks, send pipeline
//!
//! Attempting a hardware operation that is not ready is never an
//! error here; tasks reschedule themselves and retry on a later
//! scheduler pass. Missing data travels as `None` until it reaches
//! the wire, where it becomes a sentinel byte pattern.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod node;
pub mod scheduler;
pub mod state;
pub mod stream;
pub mod traits;

pub use config::NodeConfig;
pub use node::{Node, NodeEvent, Task};
pub use scheduler::{Scheduler, Tick, TICK_INFINITY};
pub use state::{Activity, ActivationEffect};
pub use stream::SampleStream;

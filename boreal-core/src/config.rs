//! Node configuration
//!
//! Timing constants for the deployed node. Defaults match the field
//! units; a firmware build may override them before constructing the
//! node.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing configuration for the orchestration core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeConfig {
    /// Temperature measurement period while active (ms)
    pub measure_interval_ms: u64,
    /// Idle time before the node drops back to sleep (ms)
    pub sleep_timeout_ms: u64,
    /// Retry delay when the radio is busy (ms)
    pub radio_retry_ms: u64,
    /// Delay before the first battery measurement after boot (ms)
    pub boot_battery_delay_ms: u64,
    /// Battery re-measurement delay after a transmission starts,
    /// capturing the voltage sag under TX load (ms)
    pub tx_battery_delay_ms: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            measure_interval_ms: 1_000,
            sleep_timeout_ms: 30_000,
            radio_retry_ms: 100,
            boot_battery_delay_ms: 1_000,
            tx_battery_delay_ms: 20,
        }
    }
}

//! Activity state machine
//!
//! The node is either asleep (display off, no measurements, minimum
//! power draw) or active (periodic measurements, display on). The
//! machine itself is pure: transitions return the effect the node
//! must apply, and the node owns the scheduler/display side of it.

/// Power/activity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Measurement task parked, display powered off
    #[default]
    Sleeping,
    /// Measurement task running on its period, display may render
    Active,
}

/// What the node must do after an activation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivationEffect {
    /// Was sleeping: arm the measurement task at its period
    StartMeasuring,
    /// Already active: the user wants an out-of-cycle report now
    SendNow,
}

impl Activity {
    /// Handle an activation trigger (physical press)
    ///
    /// Either outcome also requires the caller to re-arm the sleep
    /// timer, cancelling any previously pending instance so that
    /// exactly one is outstanding.
    pub fn on_activation(&mut self) -> ActivationEffect {
        match self {
            Activity::Sleeping => {
                *self = Activity::Active;
                ActivationEffect::StartMeasuring
            }
            Activity::Active => ActivationEffect::SendNow,
        }
    }

    /// Handle the sleep timer firing
    ///
    /// Returns true when the node just went to sleep, i.e. the caller
    /// must park the measurement task and power the display off.
    pub fn on_sleep_timeout(&mut self) -> bool {
        match self {
            Activity::Active => {
                *self = Activity::Sleeping;
                true
            }
            Activity::Sleeping => false,
        }
    }

    /// True while in active measurement mode
    pub fn is_active(&self) -> bool {
        matches!(self, Activity::Active)
    }
}

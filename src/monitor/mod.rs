//! Monitor state machine.
//!
//! ```text
//!              ARM                  vibration > threshold
//!  Inactive ─────────► Monitoring ─────────────────────────► Alerting
//!     ▲                 │     ▲                                 │
//!     └──── DISARM ─────┘     └──────────── DISARM ─────────────┘
//! ```
//!
//! Every other (state, trigger) pair leaves the state unchanged.

pub mod controller;


pub use controller::MonitorController;

use crate::ui::ButtonEvent;

/// System state. Owned by [`MonitorController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Monitoring switched off (power-on state).
    #[default]
    Inactive,
    /// Sampling the sensor every tick.
    Monitoring,
    /// Alarm sounding until DISARM.
    Alerting,
}

/// Anything that can move the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    Arm,
    Disarm,
    /// A sample strictly above the threshold.
    Vibration,
}

impl From<ButtonEvent> for Trigger {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Arm => Trigger::Arm,
            ButtonEvent::Disarm => Trigger::Disarm,
        }
    }
}

impl SystemState {
    /// Next state for `trigger`, or `None` if the trigger means nothing here.
    pub fn on(self, trigger: Trigger) -> Option<SystemState> {
        use SystemState::*;

        match (self, trigger) {
            (Inactive, Trigger::Arm) => Some(Monitoring),
            (Monitoring, Trigger::Disarm) => Some(Inactive),
            (Monitoring, Trigger::Vibration) => Some(Alerting),
            (Alerting, Trigger::Disarm) => Some(Monitoring),
            _ => None,
        }
    }
}

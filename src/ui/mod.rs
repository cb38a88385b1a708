//! User interface - OLED screens, RGB status LED + buzzer, two buttons.
//!
//! ## Components
//!
//! - **Display**: fixed text screens on a 128×64 monochrome panel
//! - **Indicator**: tri-color LED and PWM buzzer
//! - **Buttons**: ARM and DISARM tactile switches with debouncing

pub mod buttons;
pub mod display;
pub mod indicator;

/// Screens the display can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenContent {
    /// Shown once at boot, before the operator arms the monitor.
    Welcome,
    /// Monitoring with no alarm.
    ArmedIdle,
    /// Monitoring switched off.
    Disarmed,
    /// Vibration over threshold.
    AlertVibration,
}

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Arm,
    Disarm,
}

//! Structural vibration monitor - host-testable core.
//!
//! Everything with behaviour lives here: the three-state monitor, button
//! debouncing, sensor conversion, the LED/buzzer indicator and the text
//! screens.  Hardware is reached only through `embedded-hal` traits and the
//! small traits in [`hal`], so the whole loop runs on the host against
//! simulated pins.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and binds these traits to RP2040 peripherals.

#![cfg_attr(not(test), no_std)]

// This must go first so the logging macros are visible to every module.
mod fmt;

pub mod config;
pub mod error;
pub mod hal;
pub mod monitor;
pub mod sensor;
pub mod ui;

pub use error::Error;
pub use monitor::{MonitorController, SystemState, Trigger};
pub use sensor::{AnalogSampler, VibrationSample};
pub use ui::buttons::InputDebouncer;
pub use ui::display::DisplayPresenter;
pub use ui::indicator::{Color, IndicatorCommand, IndicatorDriver};
pub use ui::{ButtonEvent, ScreenContent};

//! RP2040 bindings for the monitor's collaborator traits.
//!
//! - **Analog**: vibration sensor on ADC2 (GP28), blocking conversions
//! - **Clock**: Embassy uptime
//! - **Display**: SSD1306 128×64 OLED via I²C1

pub mod analog;
pub mod clock;
pub mod display;

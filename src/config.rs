//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, calibration values and timing parameters
//! live here so they can be tuned in one place.

// GPIO pin assignments (Raspberry Pi Pico / BitDogLab defaults)
//
// These are logical names; the actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Vibration sensor → GP28 (ADC2)
//   Button ARM       → GP5
//   Button DISARM    → GP6
//   LED red          → GP10
//   LED green        → GP11
//   LED blue         → GP12
//   Buzzer (PWM)     → GP21 (slice 2, channel B)
//   I²C1 SDA         → GP14
//   I²C1 SCL         → GP15

// Analog front-end

/// Full-scale ADC reading (12-bit converter).
pub const ADC_RESOLUTION: u16 = 4095;

/// ADC reference voltage (volts).
pub const ADC_REFERENCE_VOLTS: f32 = 3.3;

/// Sensor output at rest - mid-rail bias of the sensor amplifier (volts).
pub const BASELINE_VOLTS: f32 = 1.65;

/// Deviation from baseline that raises the alarm (volts, strict `>`).
pub const VIBRATION_THRESHOLD_VOLTS: f32 = 0.25;

// Control loop timing

/// Pause at the end of every ordinary tick (ms).
pub const TICK_PERIOD_MS: u32 = 100;

/// Settle time after a button press changed the state (ms).
pub const BUTTON_SETTLE_MS: u32 = 200;

/// Pause between the end of a tone burst and the next disarm check (ms).
pub const ALERT_RECHECK_MS: u32 = 500;

/// Minimum time between two accepted presses of the same button (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 200;

// Buzzer

/// Tone frequency (Hz).
pub const TONE_FREQUENCY_HZ: u32 = 2_000;

/// PWM clock divider used to reach [`TONE_FREQUENCY_HZ`] from `clk_sys`.
pub const TONE_PWM_DIVIDER: u8 = 4;

/// Duty cycle while the tone is on (percent of the PWM period).
pub const TONE_DUTY_PERCENT: u8 = 90;

/// Length of each tone pulse (ms).
pub const TONE_ON_MS: u32 = 300;

/// Silence after each tone pulse (ms).
pub const TONE_OFF_MS: u32 = 100;

/// Pulses per burst.
pub const TONE_BURST_REPEATS: usize = 5;

// Display

/// SSD1306 I²C bus frequency (Hz).
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

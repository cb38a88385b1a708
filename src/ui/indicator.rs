//! Tri-color status LED and alarm buzzer.
//!
//! | State      | Color | Buzzer       |
//! |------------|-------|--------------|
//! | Inactive   | Blue  | silent       |
//! | Monitoring | Green | silent       |
//! | Alerting   | Red   | tone bursts  |

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use crate::config::{TONE_BURST_REPEATS, TONE_DUTY_PERCENT, TONE_OFF_MS, TONE_ON_MS};
use crate::error::Error;
use crate::monitor::SystemState;

/// LED color. Exactly one channel is lit at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Levels for the (red, green, blue) lines.
    pub fn channels(self) -> [bool; 3] {
        match self {
            Color::Red => [true, false, false],
            Color::Green => [false, true, false],
            Color::Blue => [false, false, true],
        }
    }
}

/// What the indicator should show for one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorCommand {
    pub color: Color,
    pub audible: bool,
}

impl IndicatorCommand {
    /// `audible_tick` asks for a burst; only the alerting state honours it.
    pub fn for_state(state: SystemState, audible_tick: bool) -> Self {
        match state {
            SystemState::Inactive => Self {
                color: Color::Blue,
                audible: false,
            },
            SystemState::Monitoring => Self {
                color: Color::Green,
                audible: false,
            },
            SystemState::Alerting => Self {
                color: Color::Red,
                audible: audible_tick,
            },
        }
    }
}

/// Drives the three LED lines and the buzzer PWM channel.
pub struct IndicatorDriver<O, P> {
    leds: [O; 3],
    buzzer: P,
}

impl<O: OutputPin, P: SetDutyCycle> IndicatorDriver<O, P> {
    pub fn new(red: O, green: O, blue: O, buzzer: P) -> Self {
        Self {
            leds: [red, green, blue],
            buzzer,
        }
    }

    /// Show `state`; when alerting with `audible_tick` set, also play one
    /// full burst before returning.
    ///
    /// The burst isn't interruptible: disarm is only checked by the caller
    /// once it completes.
    pub async fn apply<D: DelayNs>(&mut self, state: SystemState, audible_tick: bool, delay: &mut D) {
        let command = IndicatorCommand::for_state(state, audible_tick);
        self.show_color(command.color);
        if command.audible {
            self.tone_burst(delay).await;
        } else {
            self.set_tone(0);
        }
    }

    fn show_color(&mut self, color: Color) {
        for (led, on) in self.leds.iter_mut().zip(color.channels()) {
            if let Err(e) = led.set_state(PinState::from(on)).map_err(|_| Error::Indicator) {
                warn!("indicator: {} not shown: {}", color, e);
            }
        }
    }

    async fn tone_burst<D: DelayNs>(&mut self, delay: &mut D) {
        for _ in 0..TONE_BURST_REPEATS {
            self.set_tone(TONE_DUTY_PERCENT);
            delay.delay_ms(TONE_ON_MS).await;
            self.set_tone(0);
            delay.delay_ms(TONE_OFF_MS).await;
        }
    }

    fn set_tone(&mut self, percent: u8) {
        if let Err(e) = self
            .buzzer
            .set_duty_cycle_percent(percent)
            .map_err(|_| Error::Buzzer)
        {
            warn!("indicator: buzzer duty {}% failed: {}", percent, e);
        }
    }
}

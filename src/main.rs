//! Structural vibration monitor firmware (Raspberry Pi Pico).
//!
//! Boot: outputs go to the Inactive combination (blue LED, buzzer silent)
//! and the welcome screen is shown.  ARM starts monitoring, DISARM stops it
//! or acknowledges a running alarm.  The loop never exits.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Delay;
use vibmon::config::{
    DISPLAY_I2C_FREQUENCY_HZ, TONE_FREQUENCY_HZ, TONE_PWM_DIVIDER,
};
use vibmon::{AnalogSampler, DisplayPresenter, IndicatorDriver, InputDebouncer, MonitorController};
use {defmt_rtt as _, panic_probe as _};

use crate::board::analog::SensorChannel;
use crate::board::clock::Uptime;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("vibmon starting");

    // Sensor on ADC2 (GP28).
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mic = Channel::new_pin(p.PIN_28, Pull::None);
    let sampler = AnalogSampler::new(SensorChannel::new(adc, mic));

    // Buttons, active-low.
    let buttons = InputDebouncer::new(Input::new(p.PIN_5, Pull::Up), Input::new(p.PIN_6, Pull::Up));

    // Buzzer: slice 2 channel B, wrapped to the tone frequency.
    let mut tone = pwm::Config::default();
    tone.divider = TONE_PWM_DIVIDER.into();
    tone.top = (embassy_rp::clocks::clk_sys_freq() / u32::from(TONE_PWM_DIVIDER) / TONE_FREQUENCY_HZ - 1) as u16;
    tone.compare_b = 0;
    let (_, buzzer) = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, tone).split();
    let buzzer = unwrap!(buzzer);

    let indicator = IndicatorDriver::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::High),
        buzzer,
    );

    // OLED on I²C1: SDA GP14, SCL GP15.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let presenter = DisplayPresenter::new(board::display::init(i2c));

    let controller = MonitorController::new(sampler, buttons, indicator, presenter, Delay, Uptime);
    controller.run().await
}

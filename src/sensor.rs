//! Vibration sensor sampling.
//!
//! The sensor sits on an amplifier biased at mid-rail, so a still structure
//! reads [`BASELINE_VOLTS`] and any vibration swings the output either way.
//! The monitor only cares about the size of the swing.

use crate::config::{ADC_REFERENCE_VOLTS, ADC_RESOLUTION, BASELINE_VOLTS};
use crate::hal::AnalogSource;

/// One reading of the vibration sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibrationSample {
    /// Raw converter output.
    pub raw: u16,
    /// `raw` converted to volts.
    pub volts: f32,
    /// `|volts - BASELINE_VOLTS|`.
    pub deviation: f32,
}

impl VibrationSample {
    /// Convert a raw ADC reading. Readings above full scale are clamped.
    pub fn from_raw(raw: u16) -> Self {
        let raw = raw.min(ADC_RESOLUTION);
        let volts = f32::from(raw) * ADC_REFERENCE_VOLTS / f32::from(ADC_RESOLUTION);
        Self {
            raw,
            volts,
            deviation: libm::fabsf(volts - BASELINE_VOLTS),
        }
    }

    /// A sample of a perfectly still sensor (zero deviation).
    pub fn quiescent() -> Self {
        let raw = libm::roundf(BASELINE_VOLTS / ADC_REFERENCE_VOLTS * f32::from(ADC_RESOLUTION));
        Self {
            raw: raw as u16,
            volts: BASELINE_VOLTS,
            deviation: 0.0,
        }
    }

    /// Whether this sample is strictly above `threshold`.
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.deviation > threshold
    }
}

/// Wraps the sensor's analog channel.
pub struct AnalogSampler<A> {
    source: A,
}

impl<A: AnalogSource> AnalogSampler<A> {
    pub fn new(source: A) -> Self {
        Self { source }
    }

    /// Take one reading.
    ///
    /// A failed conversion reads as a still sensor, so a flaky ADC can
    /// never raise the alarm on its own.
    pub fn sample(&mut self) -> VibrationSample {
        match self.source.read_raw() {
            Ok(raw) => VibrationSample::from_raw(raw),
            Err(e) => {
                warn!("sensor: read failed: {}", e);
                VibrationSample::quiescent()
            }
        }
    }
}

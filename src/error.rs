//! Unified error type for vibmon.
//!
//! We avoid `alloc` - all error variants are plain tags.  Every error is a
//! collaborator failure: the monitor logs it and carries on, so nothing
//! here is ever fatal.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The ADC conversion failed or the channel is unavailable.
    Adc,

    /// A button line could not be read.
    Input,

    /// An indicator LED line could not be driven.
    Indicator,

    /// The buzzer PWM duty could not be set.
    Buzzer,

    /// Drawing to, or flushing, the display failed.
    Display,
}

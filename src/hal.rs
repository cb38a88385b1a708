//! Collaborator interfaces the monitor needs from the board.
//!
//! Digital lines, the buzzer PWM and delays come straight from
//! `embedded-hal` / `embedded-hal-async`.  The traits below cover what
//! embedded-hal 1.0 doesn't define: a one-shot ADC read, a text display
//! and a millisecond clock.

use crate::error::Error;

/// A single analog channel.
pub trait AnalogSource {
    /// Perform one conversion, returning a value in `0..=ADC_RESOLUTION`.
    fn read_raw(&mut self) -> Result<u16, Error>;
}

/// A monochrome, buffered text display.
///
/// Drawing only touches the buffer; nothing reaches the panel until
/// [`commit`](TextSurface::commit).
pub trait TextSurface {
    /// Blank the whole buffer.
    fn clear(&mut self) -> Result<(), Error>;

    /// Draw `text` with its top-left corner at pixel (`column`, `row`).
    fn draw_text(&mut self, column: i32, row: i32, text: &str) -> Result<(), Error>;

    /// Push the buffer to the panel.
    fn commit(&mut self) -> Result<(), Error>;
}

/// Monotonic time source.
pub trait Clock {
    /// Milliseconds since boot.
    fn now_ms(&self) -> u64;
}

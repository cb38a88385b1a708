//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use vibmon::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use vibmon::hal::TextSurface;
use vibmon::Error;

// The driver size below must match the geometry the screens are laid out for.
const _: () = assert!(SCREEN_WIDTH == 128 && SCREEN_HEIGHT == 64);

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The OLED as a [`TextSurface`].
pub struct Oled<I2C>(Display<I2C>);

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("display: init failed");
    }
    display.clear_buffer();
    if display.flush().is_err() {
        warn!("display: flush failed");
    }
    Oled(display)
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> TextSurface for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.0.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, column: i32, row: i32, text: &str) -> Result<(), Error> {
        Text::with_baseline(text, Point::new(column, row), text_style(), Baseline::Top)
            .draw(&mut self.0)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }

    fn commit(&mut self) -> Result<(), Error> {
        self.0.flush().map_err(|_| Error::Display)
    }
}

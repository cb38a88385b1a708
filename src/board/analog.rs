//! Vibration sensor input on the RP2040 ADC.

use embassy_rp::adc::{Adc, Blocking, Channel};
use vibmon::hal::AnalogSource;
use vibmon::Error;

/// One ADC channel with exclusive use of the converter.
pub struct SensorChannel {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl SensorChannel {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogSource for SensorChannel {
    fn read_raw(&mut self) -> Result<u16, Error> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| Error::Adc)
    }
}

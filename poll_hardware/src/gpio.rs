use rppal::gpio::{Gpio, InputPin};
use tracing::trace;

use poll_traits::StatusSource;

use crate::error::{HwError, Result};

/// Status source backed by a single GPIO input line.
///
/// Reads 1 while the line is active, 0 otherwise.
pub struct GpioStatus {
    pin: InputPin,
    active_low: bool,
}

impl GpioStatus {
    pub fn new(bcm_pin: u8, active_low: bool) -> Result<Self> {
        let gpio = Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
        let pin = gpio
            .get(bcm_pin)
            .map_err(|e| HwError::Gpio(e.to_string()))?
            .into_input();
        Ok(Self { pin, active_low })
    }
}

impl StatusSource for GpioStatus {
    fn read_status(&mut self) -> std::result::Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        let active = self.pin.is_high() != self.active_low;
        trace!(active, "gpio status read");
        Ok(u32::from(active))
    }
}

// src/common/generic_hal.rs

//! Adapter from embedded-hal 1.0 peripherals to the driver's bus and timer traits.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use super::hal_traits::{BusFault, Sht21Bus, Sht21Timer};

/// Pairs an I2C bus with a delay provider.
#[derive(Debug)]
pub struct GenericHal<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> GenericHal<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        GenericHal { i2c, delay }
    }

    /// Gives back the wrapped peripherals.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Sht21Bus for GenericHal<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer)
    }

    fn fault(error: &Self::Error) -> BusFault {
        match error.kind() {
            ErrorKind::NoAcknowledge(_) => BusFault::NoAcknowledge,
            _ => BusFault::Other,
        }
    }
}

impl<I2C, D> Sht21Timer for GenericHal<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

//! Sensirion SHT3x temperature / humidity sensor on I²C.
//!
//! Driven through the `sht31` crate in its default configuration:
//! single-shot, high repeatability, °C, ADDR pin low (0x44). One
//! conversion yields both channels.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use envmon::hal::Hygrometer;
use envmon::Error;
use sht31::prelude::*;

pub struct Sht3x<I2C, D> {
    sht: SHT31<SingleShot, I2C, D>,
}

impl<I2C, D> Sht3x<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            sht: SHT31::new(i2c, delay),
        }
    }
}

impl<I2C, D> Hygrometer for Sht3x<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn measure(&mut self) -> Result<(f32, f32), Error> {
        let reading = self.sht.read().map_err(|_| Error::SensorBus)?;
        Ok((reading.temperature, reading.humidity))
    }
}

//! Interfaces to the hardware collaborators.
//!
//! The monitor core only talks to the sensor, the supply-voltage ADC and
//! the OLED through these traits; the firmware binary implements them on
//! top of Embassy drivers and the tests implement them in memory.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use crate::error::Error;

/// Temperature / relative humidity sensor as the monitor sees it.
///
/// Temperature is read first and humidity second; a failed read returns
/// NaN.
pub trait ClimateSensor {
    /// Temperature in °C, NaN on failure.
    fn read_temperature(&mut self) -> f32;
    /// Relative humidity in %, NaN on failure.
    fn read_humidity(&mut self) -> f32;
}

/// Sensor that converts both channels in one measurement, returning
/// (°C, %RH).
pub trait Hygrometer {
    fn measure(&mut self) -> Result<(f32, f32), Error>;
}

/// [`ClimateSensor`] over a [`Hygrometer`].
///
/// The temperature read runs the conversion and keeps its humidity; the
/// humidity read that follows hands it out. Both values of a sample come
/// from the same conversion.
pub struct PairedReadings<H> {
    hygrometer: H,
    humidity: f32,
}

impl<H: Hygrometer> PairedReadings<H> {
    pub fn new(hygrometer: H) -> Self {
        Self {
            hygrometer,
            humidity: f32::NAN,
        }
    }

    pub fn hygrometer(&self) -> &H {
        &self.hygrometer
    }
}

impl<H: Hygrometer> ClimateSensor for PairedReadings<H> {
    fn read_temperature(&mut self) -> f32 {
        match self.hygrometer.measure() {
            Ok((temperature, humidity)) => {
                self.humidity = humidity;
                temperature
            }
            Err(e) => {
                warn!("Sensor: {}", e);
                self.humidity = f32::NAN;
                f32::NAN
            }
        }
    }

    /// Humidity of the last conversion, consumed; NaN if there is none.
    fn read_humidity(&mut self) -> f32 {
        core::mem::replace(&mut self.humidity, f32::NAN)
    }
}

/// Supply / battery voltage source, read fresh for every frame.
pub trait BatteryGauge {
    fn read_volts(&mut self) -> f32;
}

/// Monochrome frame-buffered panel.
///
/// Drawing goes to an off-screen buffer through `DrawTarget`; nothing is
/// visible until [`Panel::flush`].
pub trait Panel: DrawTarget<Color = BinaryColor> {
    /// Blank the frame buffer.
    fn clear_frame(&mut self);
    /// Push the frame buffer to the glass.
    fn flush(&mut self) -> Result<(), Error>;
    fn power_on(&mut self) -> Result<(), Error>;
    fn power_off(&mut self) -> Result<(), Error>;
}

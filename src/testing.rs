//! In-memory stand-ins for the hardware, used by the unit tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::hal::{BatteryGauge, ClimateSensor, Panel};

const W: usize = SCREEN_WIDTH as usize;
const H: usize = SCREEN_HEIGHT as usize;

/// 128×64 frame buffer that counts panel operations.
pub struct FramePanel {
    pixels: [[bool; W]; H],
    pub flushes: usize,
    pub clears: usize,
    pub power_ons: usize,
    pub power_offs: usize,
    pub fail_flush: bool,
}

impl FramePanel {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            flushes: 0,
            clears: 0,
            power_ons: 0,
            power_offs: 0,
            fail_flush: false,
        }
    }

    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.pixels[y as usize][x as usize]
    }

    /// Number of lit pixels in rows `top..=bottom`.
    pub fn lit_in_rows(&self, top: i32, bottom: i32) -> usize {
        self.pixels[top as usize..=bottom as usize]
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }
}

impl OriginDimensions for FramePanel {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl DrawTarget for FramePanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Panel for FramePanel {
    fn clear_frame(&mut self) {
        self.clears += 1;
        self.pixels = [[false; W]; H];
    }

    fn flush(&mut self) -> Result<(), Error> {
        if self.fail_flush {
            return Err(Error::Display);
        }
        self.flushes += 1;
        Ok(())
    }

    fn power_on(&mut self) -> Result<(), Error> {
        self.power_ons += 1;
        Ok(())
    }

    fn power_off(&mut self) -> Result<(), Error> {
        self.power_offs += 1;
        Ok(())
    }
}

/// Delay that returns immediately and counts calls.
#[derive(Default)]
pub struct NoDelay {
    pub calls: usize,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        self.calls += 1;
    }
}

/// Sensor returning a scripted sequence of readings, then repeating the
/// last one.
pub struct ScriptedSensor {
    readings: std::vec::Vec<(f32, f32)>,
    next: usize,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(readings: &[(f32, f32)]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
            reads: 0,
        }
    }

    fn current(&self) -> (f32, f32) {
        let i = self.next.min(self.readings.len().saturating_sub(1));
        self.readings.get(i).copied().unwrap_or((f32::NAN, f32::NAN))
    }
}

impl ClimateSensor for ScriptedSensor {
    fn read_temperature(&mut self) -> f32 {
        self.reads += 1;
        self.current().0
    }

    fn read_humidity(&mut self) -> f32 {
        let h = self.current().1;
        self.next += 1;
        h
    }
}

/// Fixed supply voltage.
pub struct FixedBattery(pub f32);

impl BatteryGauge for FixedBattery {
    fn read_volts(&mut self) -> f32 {
        self.0
    }
}

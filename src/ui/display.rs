//! SSD1306 OLED display wrapper.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use envmon::config::DISPLAY_I2C_ADDR;
use envmon::hal::Panel;
use envmon::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered OLED exposed to the monitor core as a [`Panel`].
pub struct Oled<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
///
/// Failure here is fatal for the firmware: without a display the device
/// has nothing to show.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(Oled { display })
}

impl<I2C> OriginDimensions for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl<I2C> DrawTarget for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Color = BinaryColor;
    type Error = <Display<I2C> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }
}

impl<I2C> Panel for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear_frame(&mut self) {
        self.display.clear_buffer();
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.display.flush().map_err(|_| Error::Display)
    }

    fn power_on(&mut self) -> Result<(), Error> {
        self.display.set_display_on(true).map_err(|_| Error::Display)
    }

    fn power_off(&mut self) -> Result<(), Error> {
        self.display.set_display_on(false).map_err(|_| Error::Display)
    }
}

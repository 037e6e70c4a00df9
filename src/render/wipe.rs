//! Sleep transition: a filled rectangle shrinking towards the centre.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_hal::delay::DelayNs;

use crate::config::WIPE_STEP_MS;
use crate::error::Error;
use crate::hal::Panel;

/// Play the wipe animation and leave the panel blank. The caller powers
/// the panel off afterwards.
///
/// Each step is flushed on its own, so this blocks for roughly
/// `height / 2 × (flush + WIPE_STEP_MS)`.
pub fn wipe<P, D>(panel: &mut P, delay: &mut D) -> Result<(), Error>
where
    P: Panel,
    D: DelayNs,
{
    let size = panel.bounding_box().size;
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);

    for inset in 0..size.height / 2 {
        panel.clear_frame();
        Rectangle::new(
            Point::new(inset as i32, inset as i32),
            Size::new(
                size.width.saturating_sub(2 * inset),
                size.height - 2 * inset,
            ),
        )
        .into_styled(fill)
        .draw(panel)
        .map_err(|_| Error::Display)?;
        panel.flush()?;
        delay.delay_ms(WIPE_STEP_MS);
    }

    panel.clear_frame();
    panel.flush()
}

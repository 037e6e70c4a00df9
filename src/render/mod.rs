//! Frame composition for the 128×64 OLED.
//!
//! A frame is: clear, readout (or the low-battery screen), trend graph
//! (normal layout only), one flush.

pub mod graph;
pub mod readout;
pub mod wipe;

pub use readout::Layout;

use crate::error::Error;
use crate::hal::Panel;
use crate::history::History;

/// Paint one complete frame and push it to the panel.
pub fn render_frame<P: Panel>(panel: &mut P, history: &History, volts: f32) -> Result<Layout, Error> {
    panel.clear_frame();

    let layout = readout::layout_for(volts);
    match layout {
        Layout::Normal => {
            readout::draw_readings(panel, history.latest(), volts).map_err(|_| Error::Display)?;
            graph::draw_graph(panel, &history.snapshot()).map_err(|_| Error::Display)?;
        }
        Layout::LowBattery => {
            warn!("Battery low: {} V", volts);
            readout::draw_low_battery(panel, volts).map_err(|_| Error::Display)?;
        }
    }

    panel.flush()?;
    Ok(layout)
}

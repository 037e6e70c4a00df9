//! Numeric readout: latest temperature, humidity and supply voltage.
//!
//! Screen layout (128×64):
//! ```text
//!  Temperature            Voltage
//!  21.50°C                  2.98 V
//!                      ┌──────────┐
//!  Humidity            │  graph   │
//!  45.20%              └──────────┘
//! ```
//! Below the low-battery threshold the whole screen is replaced by a
//! warning showing only the voltage.

use core::fmt::Write;

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::config::LOW_BATTERY_THRESHOLD_V;
use crate::history::Sample;

/// Shown in place of a value before the first successful sample.
const PLACEHOLDER: &str = "--.--";

/// Which screen was painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Readings plus trend graph.
    Normal,
    /// Low-battery warning, nothing else.
    LowBattery,
}

pub fn is_low_battery(volts: f32) -> bool {
    volts < LOW_BATTERY_THRESHOLD_V
}

pub fn layout_for(volts: f32) -> Layout {
    if is_low_battery(volts) {
        Layout::LowBattery
    } else {
        Layout::Normal
    }
}

fn style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Format with two decimals. The placeholder stands in when there is no
/// value or the value does not fit the text buffer.
pub fn format_value(value: Option<f32>, suffix: &str) -> String<16> {
    if let Some(v) = value {
        let mut s: String<16> = String::new();
        if write!(s, "{:.2}{}", v, suffix).is_ok() {
            return s;
        }
    }
    placeholder(suffix)
}

fn placeholder(suffix: &str) -> String<16> {
    let mut s: String<16> = String::new();
    let fits = s.push_str(PLACEHOLDER).is_ok() && s.push_str(suffix).is_ok();
    debug_assert!(fits, "suffix too long: {}", suffix);
    s
}

fn draw_text<D>(
    target: &mut D,
    text: &str,
    at: Point,
    font: &'static MonoFont<'static>,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, at, style(font), Baseline::Top).draw(target)
}

/// Paint the normal readout (captions and values, no graph).
pub fn draw_readings<D>(target: &mut D, latest: Option<Sample>, volts: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // Temperature
    draw_text(target, "Temperature", Point::new(0, 0), &FONT_6X10)?;
    let temperature = format_value(latest.map(|s| s.temperature), "");
    let next = draw_text(target, &temperature, Point::new(0, 10), &FONT_10X20)?;
    draw_text(target, "°C", next, &FONT_6X10)?;

    // Humidity
    draw_text(target, "Humidity", Point::new(0, 35), &FONT_6X10)?;
    let humidity = format_value(latest.map(|s| s.humidity), "%");
    draw_text(target, &humidity, Point::new(0, 45), &FONT_10X20)?;

    // Supply voltage
    draw_text(target, "Voltage", Point::new(85, 5), &FONT_6X10)?;
    let voltage = format_value(Some(volts), " V");
    draw_text(target, &voltage, Point::new(90, 15), &FONT_6X10)?;

    Ok(())
}

/// Paint the low-battery warning screen.
pub fn draw_low_battery<D>(target: &mut D, volts: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_text(target, "Low battery !", Point::new(0, 10), &FONT_6X10)?;
    let voltage = format_value(Some(volts), " V");
    draw_text(target, &voltage, Point::new(0, 25), &FONT_6X10)?;
    Ok(())
}

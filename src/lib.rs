//! Host-testable core of the envmon environmental monitor.
//!
//! This library holds everything that does not touch the nRF52840
//! peripherals: sample history, sampling schedule, button debouncing,
//! screen power policy and frame rendering. The firmware binary
//! (`main.rs`) binds it to the real sensor, ADC and OLED.
//!
//! Usage: `cargo test --lib` / `cargo test --test integration`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and requires the `embedded` feature.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in every module below.
#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod error;
pub mod hal;
pub mod history;
pub mod monitor;
pub mod power;
pub mod power_logic;
pub mod render;
pub mod scheduler;
pub mod wake;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use history::{History, Sample};
pub use monitor::{Monitor, TickReport};
pub use power::{ScreenState, WakeOutcome};
pub use render::Layout;
pub use wake::WakeTrigger;

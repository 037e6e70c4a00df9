//! User interface hardware - OLED display + wake button.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, wrapped as an
//!   [`envmon::hal::Panel`]
//! - **Button**: one tactile switch feeding the debounced wake trigger

pub mod buttons;
pub mod display;

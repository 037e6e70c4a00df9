//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, screen geometry and
//! thresholds live here so they can be tuned in one place.

// Sampling

/// Number of samples kept in the rolling history.
/// 24 samples × 30 minutes = 12 hours of history.
pub const HISTORY_CAPACITY: usize = 24;

/// Interval between two sensor reads (ms). 30 minutes.
pub const SAMPLE_INTERVAL_MS: u32 = 30 * 60 * 1000;

// Display power

/// How long the screen stays on after a wake request (ms).
pub const DISPLAY_DURATION_MS: u32 = 30_000;

/// Minimum time between two accepted button edges (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 250;

/// Pause between two frames of the sleep wipe animation (ms).
pub const WIPE_STEP_MS: u32 = 5;

/// Main loop polling period (ms).
pub const POLL_INTERVAL_MS: u64 = 20;

// Battery

/// Below this supply voltage the readout is replaced by a warning screen.
pub const LOW_BATTERY_THRESHOLD_V: f32 = 2.85;

/// Full-scale voltage of the SAADC with gain 1/6 and the 0.6 V reference.
pub const VDD_ADC_FULL_SCALE_V: f32 = 3.6;

/// Number of codes of the 12-bit SAADC.
pub const VDD_ADC_COUNTS: f32 = 4096.0;

// Screen geometry (SSD1306 128×64)

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

/// Trend graph size (pixels).
pub const GRAPH_WIDTH: i32 = 40;
pub const GRAPH_HEIGHT: i32 = 35;

/// Trend graph top-left corner, 2 px from the right and bottom edges.
pub const GRAPH_X: i32 = SCREEN_WIDTH - GRAPH_WIDTH - 2;
pub const GRAPH_Y: i32 = SCREEN_HEIGHT - GRAPH_HEIGHT - 2;

/// Headroom added above the highest temperature so the line never
/// touches the top border and a flat history still has a positive span.
pub const TEMPERATURE_HEADROOM: f32 = 2.0;

/// Fixed humidity plotting range (%RH).
pub const HUMIDITY_SCALE_MIN: f32 = 10.0;
pub const HUMIDITY_SCALE_MAX: f32 = 95.0;

/// The cursor marker leaves this many pixels free above and below.
pub const CURSOR_MARKER_INSET: i32 = 15;

/// Horizontal offset of the "T" / "H" labels, left of the graph.
pub const LABEL_OFFSET_X: i32 = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Wake button    → P0.11 (active low, internal pull-up)
//   OLED SDA       → P0.26 (TWIM0)
//   OLED SCL       → P0.27 (TWIM0)
//   Sensor SDA     → P0.30 (TWIM1)
//   Sensor SCL     → P0.31 (TWIM1), SHT3x at 0x44

/// SSD1306 I²C address.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

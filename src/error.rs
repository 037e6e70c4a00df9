//! Unified error type for envmon.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensor
    /// The temperature or humidity channel returned NaN.
    SensorRead,

    /// The sensor did not acknowledge or returned a bad checksum.
    SensorBus,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::SensorRead => f.write_str("sensor read failure"),
            Error::SensorBus => f.write_str("sensor bus failure"),
            Error::Display => f.write_str("display failure"),
        }
    }
}

//! Periodic sampling schedule.
//!
//! Decides, once per main-loop tick, whether the sensor is due to be read.
//! The first poll after boot is always due so the history starts filling
//! immediately. A due poll stamps the attempt time whatever the outcome of
//! the read, so a failing sensor is retried one full interval later.

use crate::clock::{elapsed, Millis};
use crate::config::SAMPLE_INTERVAL_MS;

pub struct SampleScheduler {
    interval_ms: Millis,
    last_attempt: Option<Millis>,
}

impl SampleScheduler {
    pub const fn new() -> Self {
        Self::with_interval(SAMPLE_INTERVAL_MS)
    }

    pub const fn with_interval(interval_ms: Millis) -> Self {
        Self {
            interval_ms,
            last_attempt: None,
        }
    }

    /// Returns `true` if a read should happen now, and records the attempt.
    pub fn poll(&mut self, now: Millis) -> bool {
        let due = match self.last_attempt {
            None => true,
            Some(last) => elapsed(now, last) >= self.interval_ms,
        };
        if due {
            self.last_attempt = Some(now);
        }
        due
    }

    /// Timestamp of the last attempted read.
    pub fn last_attempt(&self) -> Option<Millis> {
        self.last_attempt
    }
}

impl Default for SampleScheduler {
    fn default() -> Self {
        Self::new()
    }
}

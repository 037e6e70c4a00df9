//! Rolling sample history.
//!
//! A fixed-capacity ring keeps the last [`HISTORY_CAPACITY`] samples.
//! Slots are `Option<Sample>`: a slot is either empty (never written) or
//! holds a complete temperature/humidity pair, since a pair is only ever
//! stored when both channels read successfully.
//!
//! Layout:
//! ```text
//!   slots:  [ s0 ][ s1 ][ s2 ][ -- ][ -- ] ... [ -- ]
//!                             ^ cursor (next write)
//! ```
//! Once full, the write at `cursor` overwrites the oldest sample.

use crate::config::HISTORY_CAPACITY;
use crate::error::Error;

/// One temperature (°C) / relative humidity (%) reading pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub temperature: f32,
    pub humidity: f32,
}

impl Sample {
    /// Build a sample, rejecting the pair if either channel is not a
    /// finite number.
    pub fn new(temperature: f32, humidity: f32) -> Result<Self, Error> {
        if !temperature.is_finite() || !humidity.is_finite() {
            return Err(Error::SensorRead);
        }
        Ok(Self {
            temperature,
            humidity,
        })
    }
}

/// Fixed-capacity circular buffer.
///
/// All modulo arithmetic for the history lives here.
#[derive(Clone, Debug)]
pub struct Ring<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    cursor: usize,
    len: usize,
}

impl<T: Copy, const N: usize> Ring<T, N> {
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            cursor: 0,
            len: 0,
        }
    }

    /// Write at the cursor and advance it, overwriting the oldest entry
    /// once the ring is full.
    pub fn push(&mut self, value: T) {
        self.slots[self.cursor] = Some(value);
        self.cursor = (self.cursor + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Index of the slot the next `push` writes to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recently pushed value.
    pub fn latest(&self) -> Option<T> {
        self.slots[(self.cursor + N - 1) % N]
    }

    /// Occupied values, newest first.
    pub fn iter_age_ordered(&self) -> impl Iterator<Item = T> + '_ {
        (1..=self.len).filter_map(move |age| self.slots[(self.cursor + N - age) % N])
    }

    /// Every slot in storage order, empty ones included.
    pub fn iter_raw_order(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.slots.iter().copied()
    }

    /// Raw slot storage.
    pub fn slots(&self) -> &[Option<T>; N] {
        &self.slots
    }
}

impl<T: Copy, const N: usize> Default for Ring<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the history in raw buffer order, as consumed by the
/// graph renderer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub slots: &'a [Option<Sample>; HISTORY_CAPACITY],
    pub cursor: usize,
}

impl<'a> Snapshot<'a> {
    /// Temperatures in raw buffer order.
    pub fn temperatures(&self) -> impl Iterator<Item = Option<f32>> + 'a {
        self.slots.iter().map(|s| s.map(|s| s.temperature))
    }

    /// Humidities in raw buffer order.
    pub fn humidities(&self) -> impl Iterator<Item = Option<f32>> + 'a {
        self.slots.iter().map(|s| s.map(|s| s.humidity))
    }
}

/// Temperature/humidity history for the running session.
#[derive(Clone, Debug, Default)]
pub struct History {
    ring: Ring<Sample, HISTORY_CAPACITY>,
}

impl History {
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Store a reading pair.
    ///
    /// If either value is NaN the pair is dropped, the buffer and cursor
    /// are left untouched and [`Error::SensorRead`] is returned.
    pub fn record(&mut self, temperature: f32, humidity: f32) -> Result<Sample, Error> {
        let sample = Sample::new(temperature, humidity)?;
        self.ring.push(sample);
        Ok(sample)
    }

    /// Latest stored pair, `None` before the first successful record.
    pub fn latest(&self) -> Option<Sample> {
        self.ring.latest()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            slots: self.ring.slots(),
            cursor: self.ring.cursor(),
        }
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Stored samples, newest first.
    pub fn iter_age_ordered(&self) -> impl Iterator<Item = Sample> + '_ {
        self.ring.iter_age_ordered()
    }
}

//! Debounced wake request from the front-panel button.
//!
//! The button edge handler runs outside the main loop (GPIOTE interrupt /
//! its own task) and only ever calls [`WakeTrigger::on_edge`]. The main
//! loop is the single consumer and drains the request with
//! [`WakeTrigger::take`], one atomic swap, so an edge landing between the
//! read and the clear can be neither lost nor counted twice.
//!
//! Meant to live in a `static`:
//! ```ignore
//! static WAKE: WakeTrigger = WakeTrigger::new();
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::clock::{expired, Millis};
use crate::config::BUTTON_DEBOUNCE_MS;

pub struct WakeTrigger {
    pending: AtomicBool,
    armed: AtomicBool,
    last_accepted: AtomicU32,
}

impl WakeTrigger {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            armed: AtomicBool::new(false),
            last_accepted: AtomicU32::new(0),
        }
    }

    /// Edge handler. Accepts the edge only if more than the debounce window
    /// has passed since the last accepted one. Returns whether it was
    /// accepted.
    pub fn on_edge(&self, now: Millis) -> bool {
        let seen_before = self.armed.load(Ordering::Relaxed);
        let last = self.last_accepted.load(Ordering::Relaxed);
        if seen_before && !expired(now, last, BUTTON_DEBOUNCE_MS) {
            return false;
        }
        self.last_accepted.store(now, Ordering::Relaxed);
        self.armed.store(true, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Read and clear the pending request.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Peek without clearing.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for WakeTrigger {
    fn default() -> Self {
        Self::new()
    }
}

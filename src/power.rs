//! Display power state machine.
//!
//! ```text
//!            wake                      now > off_at
//!   ASLEEP ────────▶ ACTIVE ───────────────────────▶ ASLEEP
//!                    │    ▲
//!                    └────┘ wake (refresh off_at)
//! ```
//!
//! The device boots ACTIVE with one rendered frame. Going to sleep is
//! reported exactly once so the caller runs the wipe animation and powers
//! the panel off a single time.

use crate::clock::Millis;
use crate::config::DISPLAY_DURATION_MS;
use crate::power_logic;

/// Screen power state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenState {
    /// Panel on, showing readings until the deadline.
    Active,
    /// Panel off; sampling continues in the background.
    Asleep,
}

/// Result of a wake request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeOutcome {
    /// Screen was asleep and must be powered on and repainted.
    PoweredOn,
    /// Screen was already on; only the deadline moved.
    Extended,
}

/// Tracks whether the screen is on and when it has to go off.
pub struct DisplayPower {
    state: ScreenState,
    woke_at: Millis,
}

impl DisplayPower {
    /// Boot state: ACTIVE with the off deadline one display window away.
    pub const fn new(now: Millis) -> Self {
        Self {
            state: ScreenState::Active,
            woke_at: now,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ScreenState::Active
    }

    /// Deadline after which the screen goes off; `None` while asleep.
    pub fn off_at(&self) -> Option<Millis> {
        match self.state {
            ScreenState::Active => Some(self.woke_at.wrapping_add(DISPLAY_DURATION_MS)),
            ScreenState::Asleep => None,
        }
    }

    /// Wake request from the button: (re)start the display window.
    pub fn wake(&mut self, now: Millis) -> WakeOutcome {
        self.woke_at = now;
        match self.state {
            ScreenState::Active => WakeOutcome::Extended,
            ScreenState::Asleep => {
                info!("Power: screen on");
                self.state = ScreenState::Active;
                WakeOutcome::PoweredOn
            }
        }
    }

    /// Periodic tick. Returns `true` exactly once, on the ACTIVE → ASLEEP
    /// transition.
    pub fn tick(&mut self, now: Millis) -> bool {
        let active = self.is_active();
        if active
            && !power_logic::screen_should_be_on(active, self.woke_at, now, DISPLAY_DURATION_MS)
        {
            info!("Power: screen off");
            self.state = ScreenState::Asleep;
            return true;
        }
        false
    }
}

use crate::clock::{expired, Millis};

/// Decide whether the screen should stay on given when it was last woken
/// and the auto-off duration. The window is inclusive: the screen goes
/// off only once `now` is strictly past `woke_at + duration`.
pub fn screen_should_be_on(active: bool, woke_at: Millis, now: Millis, duration: Millis) -> bool {
    if !active {
        return false;
    }

    !expired(now, woke_at, duration)
}

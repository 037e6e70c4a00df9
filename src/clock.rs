//! Millisecond timestamps from a wrapping monotonic counter.
//!
//! The firmware clock is a `u32` millisecond count since boot which wraps
//! after ~49.7 days. Never compare two absolute timestamps directly; always
//! go through [`elapsed`] so the comparison survives the wrap.

/// Milliseconds since boot, wrapping at `u32::MAX`.
pub type Millis = u32;

/// Time elapsed from `since` to `now`, correct across one wraparound.
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// True once strictly more than `duration` ms have passed since `since`.
#[inline]
pub const fn expired(now: Millis, since: Millis, duration: Millis) -> bool {
    elapsed(now, since) > duration
}

//! GPIO wake button.
//!
//! One physical button (active-low with internal pull-up). The task waits
//! for falling edges and hands each one to the shared [`WakeTrigger`],
//! which does the 250 ms debounce. Nothing else happens here: no drawing,
//! no sensor access.

use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use envmon::WakeTrigger;

use crate::now_ms;

/// Run the wake button edge loop.
#[embassy_executor::task]
pub async fn wake_button_task(pin: AnyPin, wake: &'static WakeTrigger) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Falling edge = press (active-low).
        btn.wait_for_falling_edge().await;

        if wake.on_edge(now_ms()) {
            debug!("Button: wake accepted");
        }
    }
}

//! Browser Timers
//!
//! `setTimeout`/`setInterval` handles; dropping a handle cancels it. Native
//! builds (unit tests) have no event loop, so there the timers never fire.

#[cfg(target_arch = "wasm32")]
pub use gloo_timers::callback::{Interval, Timeout};

#[cfg(not(target_arch = "wasm32"))]
pub use inert::{Interval, Timeout};

#[cfg(not(target_arch = "wasm32"))]
mod inert {
    pub struct Timeout;

    impl Timeout {
        pub fn new<F: FnOnce() + 'static>(_millis: u32, _callback: F) -> Self {
            Timeout
        }
    }

    pub struct Interval;

    impl Interval {
        pub fn new<F: FnMut() + 'static>(_millis: u32, _callback: F) -> Self {
            Interval
        }

        pub fn cancel(self) {}
    }
}

//! Deferred Callbacks
//!
//! Periodic and one-shot timers behind a small trait so that the countdown
//! and notification lifecycles can run against a virtual clock in tests.
//! Dropping a handle cancels its timer.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Run `tick` every `millis` until the handle is dropped.
    fn repeat<F: FnMut() + 'static>(&self, millis: u32, tick: F) -> Self::Handle;

    /// Run `fire` once after `millis` unless the handle is dropped first.
    fn once<F: FnOnce() + 'static>(&self, millis: u32, fire: F) -> Self::Handle;

    /// Let a timer run without holding its handle.
    fn detach(&self, handle: Self::Handle);

    /// Fire-and-forget one-shot.
    fn defer<F: FnOnce() + 'static>(&self, millis: u32, fire: F) {
        let handle = self.once(millis, fire);
        self.detach(handle);
    }
}

/// `setInterval` / `setTimeout` via gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn repeat<F: FnMut() + 'static>(&self, millis: u32, tick: F) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, tick))
    }

    fn once<F: FnOnce() + 'static>(&self, millis: u32, fire: F) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, fire))
    }

    fn detach(&self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(interval) => {
                let _ = interval.forget();
            }
            BrowserTimer::Timeout(timeout) => {
                let _ = timeout.forget();
            }
        }
    }
}

//! Delay capabilities consumed by the poller.
//!
//! `Delay<U>` is a one-argument procedure that blocks the caller for at least
//! the given amount, with `U` defining the unit. Any `FnMut(U)` is a delay, so
//! plain closures and function items work without wrapping.

use std::thread;
use std::time::Duration;

use crate::clock::Clock;
use crate::units::{Micros, Millis};

/// Pause execution for no less than `amount`.
pub trait Delay<U> {
    fn delay(&mut self, amount: U);
}

impl<U, F> Delay<U> for F
where
    F: FnMut(U),
{
    #[inline]
    fn delay(&mut self, amount: U) {
        self(amount);
    }
}

/// Blocks the calling thread with `std::thread::sleep`.
///
/// Zero amounts return immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl ThreadSleep {
    #[inline]
    fn sleep(d: Duration) {
        if d.is_zero() {
            return;
        }
        thread::sleep(d);
    }
}

impl Delay<Duration> for ThreadSleep {
    #[inline]
    fn delay(&mut self, amount: Duration) {
        Self::sleep(amount);
    }
}

impl Delay<Millis> for ThreadSleep {
    #[inline]
    fn delay(&mut self, amount: Millis) {
        Self::sleep(amount.into());
    }
}

impl Delay<Micros> for ThreadSleep {
    #[inline]
    fn delay(&mut self, amount: Micros) {
        Self::sleep(amount.into());
    }
}

/// Adapts a [`Clock`] into a delay, so simulated clocks can drive the poller.
#[derive(Debug, Clone, Copy)]
pub struct ClockDelay<C> {
    clock: C,
}

impl<C: Clock> ClockDelay<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Delay<Duration> for ClockDelay<C> {
    #[inline]
    fn delay(&mut self, amount: Duration) {
        self.clock.sleep(amount);
    }
}

impl<C: Clock> Delay<Millis> for ClockDelay<C> {
    #[inline]
    fn delay(&mut self, amount: Millis) {
        self.clock.sleep(amount.into());
    }
}

impl<C: Clock> Delay<Micros> for ClockDelay<C> {
    #[inline]
    fn delay(&mut self, amount: Micros) {
        self.clock.sleep(amount.into());
    }
}

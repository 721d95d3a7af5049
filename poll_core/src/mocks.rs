//! Test and helper mocks for poll_core

use std::cell::{Cell, RefCell};

/// A condition that turns true on a chosen call and counts every call.
///
/// `check()` borrows the mock, so counts stay readable after the poll.
#[derive(Debug, Default)]
pub struct ScriptedCondition {
    true_on: Option<u64>,
    calls: Cell<u64>,
}

impl ScriptedCondition {
    /// True from the `k`-th call onwards (1-indexed).
    pub fn true_on(k: u64) -> Self {
        Self {
            true_on: Some(k),
            calls: Cell::new(0),
        }
    }

    pub fn never() -> Self {
        Self::default()
    }

    pub fn always() -> Self {
        Self::true_on(1)
    }

    pub fn check(&self) -> impl FnMut() -> bool + '_ {
        move || {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            self.true_on.is_some_and(|k| n >= k)
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

/// A delay that records each amount instead of sleeping.
#[derive(Debug)]
pub struct RecordingDelay<U> {
    seen: RefCell<Vec<U>>,
}

impl<U> Default for RecordingDelay<U> {
    fn default() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl<U: Clone> RecordingDelay<U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay_fn(&self) -> impl FnMut(U) + '_ {
        move |amount| self.seen.borrow_mut().push(amount)
    }

    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn amounts(&self) -> Vec<U> {
        self.seen.borrow().clone()
    }
}

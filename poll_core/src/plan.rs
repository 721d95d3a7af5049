//! Reusable poll plans and their builder.
//!
//! A `PollPlan` pairs a delay count with a delay amount so the same wait can
//! be described once and run from many call sites. Running a plan goes
//! through [`timed_poll`]/[`try_timed_poll`]; the plan only adds counting,
//! cancellation and tracing around the primitive.

use std::time::Duration;

use poll_config::PollCfg;
use poll_traits::Delay;

use crate::cancel::CancelToken;
use crate::error::{BuildError, Result};
use crate::poll::{timed_poll, try_timed_poll};
use crate::report::{PollOutcome, PollReport};
use crate::util::delays_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPlan<U> {
    delays: u32,
    interval: U,
}

impl<U: Copy> PollPlan<U> {
    pub const fn new(delays: u32, interval: U) -> Self {
        Self { delays, interval }
    }

    /// Number of delays after the first poll.
    #[inline]
    pub fn delays(&self) -> u32 {
        self.delays
    }

    /// Amount passed to the delay on every step.
    #[inline]
    pub fn interval(&self) -> U {
        self.interval
    }

    /// Polls made when the condition never becomes true.
    #[inline]
    pub fn max_attempts(&self) -> u64 {
        u64::from(self.delays) + 1
    }

    /// Run the plan and return only whether the condition was met.
    pub fn poll(&self, condition: impl FnMut() -> bool, delay_fn: impl Delay<U>) -> bool {
        timed_poll(condition, self.delays, delay_fn, self.interval)
    }

    /// Run the plan, counting attempts and delays.
    pub fn run(&self, mut condition: impl FnMut() -> bool, mut delay_fn: impl Delay<U>) -> PollReport {
        let mut attempts: u64 = 0;
        let mut delays: u32 = 0;
        let met = timed_poll(
            || {
                attempts += 1;
                let ok = condition();
                if !ok {
                    tracing::trace!(attempt = attempts, "condition not met");
                }
                ok
            },
            self.delays,
            |d: U| {
                delays += 1;
                delay_fn.delay(d);
            },
            self.interval,
        );
        let outcome = if met {
            PollOutcome::Met
        } else {
            PollOutcome::Exhausted
        };
        finish(outcome, attempts, delays)
    }

    /// Fallible [`run`](Self::run). A condition error ends the run and is
    /// returned unchanged.
    pub fn try_run<E>(
        &self,
        mut condition: impl FnMut() -> std::result::Result<bool, E>,
        mut delay_fn: impl Delay<U>,
    ) -> std::result::Result<PollReport, E> {
        let mut attempts: u64 = 0;
        let mut delays: u32 = 0;
        let met = try_timed_poll(
            || {
                attempts += 1;
                condition()
            },
            self.delays,
            |d: U| {
                delays += 1;
                delay_fn.delay(d);
            },
            self.interval,
        )?;
        let outcome = if met {
            PollOutcome::Met
        } else {
            PollOutcome::Exhausted
        };
        Ok(finish(outcome, attempts, delays))
    }

    /// [`run`](Self::run) that stops early once `cancel` fires.
    ///
    /// The token is checked before every condition check, which also covers
    /// the moment right after each delay, and again after every false check so
    /// a cancel raised during the check skips the following delay. A cancelled
    /// run makes no further polls or delays.
    pub fn run_cancellable(
        &self,
        mut condition: impl FnMut() -> bool,
        mut delay_fn: impl Delay<U>,
        cancel: &CancelToken,
    ) -> PollReport {
        struct Cancelled;

        let mut attempts: u64 = 0;
        let mut delays: u32 = 0;
        let res = try_timed_poll(
            || {
                if cancel.is_cancelled() {
                    return Err(Cancelled);
                }
                attempts += 1;
                let ok = condition();
                if !ok && cancel.is_cancelled() {
                    return Err(Cancelled);
                }
                Ok(ok)
            },
            self.delays,
            |d: U| {
                delays += 1;
                delay_fn.delay(d);
            },
            self.interval,
        );
        let outcome = match res {
            Ok(true) => PollOutcome::Met,
            Ok(false) => PollOutcome::Exhausted,
            Err(Cancelled) => PollOutcome::Cancelled,
        };
        finish(outcome, attempts, delays)
    }
}

impl<U: Copy + Default> PollPlan<U> {
    /// A single poll with no delay.
    pub fn once() -> Self {
        Self::new(0, U::default())
    }
}

impl<U: Copy + Into<Duration>> PollPlan<U> {
    /// Lower bound on the wall-clock time of a run that never succeeds,
    /// assuming the delay sleeps no less than asked. Saturating.
    pub fn min_wait(&self) -> Duration {
        let step: Duration = self.interval.into();
        step.saturating_mul(self.delays)
    }
}

impl PollPlan<Duration> {
    pub fn builder() -> PollPlanBuilder {
        PollPlanBuilder::default()
    }

    /// Build a plan from the `[poll]` config section.
    pub fn from_cfg(cfg: &PollCfg) -> Result<Self> {
        Self::builder()
            .delays(cfg.delays)
            .interval(cfg.interval_duration())
            .try_build()
    }
}

fn finish(outcome: PollOutcome, attempts: u64, delays: u32) -> PollReport {
    tracing::debug!(attempts, delays, outcome = ?outcome, "poll finished");
    PollReport {
        outcome,
        attempts,
        delays,
    }
}

/// Builder for `PollPlan<Duration>`. Validated on `try_build()`.
///
/// Either `delays` or `timeout` may be given; with neither the plan polls once.
#[derive(Debug, Default, Clone)]
pub struct PollPlanBuilder {
    delays: Option<u32>,
    interval: Option<Duration>,
    timeout: Option<Duration>,
}

impl PollPlanBuilder {
    pub fn delays(mut self, delays: u32) -> Self {
        self.delays = Some(delays);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Derive the delay count so that `delays * interval >= timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn try_build(self) -> Result<PollPlan<Duration>> {
        let interval = self
            .interval
            .ok_or_else(|| eyre::Report::new(BuildError::MissingInterval))?;
        let delays = match (self.delays, self.timeout) {
            (Some(_), Some(_)) => {
                return Err(eyre::Report::new(BuildError::InvalidConfig(
                    "set either delays or timeout, not both",
                )));
            }
            (Some(n), None) => n,
            (None, Some(timeout)) => {
                if interval.is_zero() && !timeout.is_zero() {
                    return Err(eyre::Report::new(BuildError::ZeroInterval));
                }
                delays_for(timeout, interval)
            }
            (None, None) => 0,
        };
        if delays > 0 && interval.is_zero() {
            return Err(eyre::Report::new(BuildError::ZeroInterval));
        }
        Ok(PollPlan::new(delays, interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poll_traits::{Micros, Millis};

    #[test]
    fn min_wait_per_unit() {
        assert_eq!(PollPlan::new(10, Millis(100)).min_wait(), Duration::from_secs(1));
        assert_eq!(PollPlan::new(4, Micros(250)).min_wait(), Duration::from_millis(1));
        assert_eq!(PollPlan::<Millis>::once().min_wait(), Duration::ZERO);
    }

    #[test]
    fn max_attempts_does_not_overflow() {
        let plan = PollPlan::new(u32::MAX, 1u32);
        assert_eq!(plan.max_attempts(), u64::from(u32::MAX) + 1);
    }
}

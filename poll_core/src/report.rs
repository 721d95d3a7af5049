//! Outcome of a single poll run.

use crate::error::PollError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The condition returned true.
    Met,
    /// Every attempt returned false.
    Exhausted,
    /// A cancel token fired before the condition was met.
    Cancelled,
}

/// What a poll run did: how it ended and how often each capability ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    pub outcome: PollOutcome,
    /// Condition invocations. `u64` because a full run makes `delays + 1`.
    pub attempts: u64,
    /// Delay invocations.
    pub delays: u32,
}

impl PollReport {
    #[inline]
    pub fn is_met(&self) -> bool {
        self.outcome == PollOutcome::Met
    }

    /// `Ok(self)` when met, a typed error otherwise.
    pub fn into_result(self) -> Result<Self, PollError> {
        match self.outcome {
            PollOutcome::Met => Ok(self),
            PollOutcome::Exhausted => Err(PollError::Exhausted {
                attempts: self.attempts,
            }),
            PollOutcome::Cancelled => Err(PollError::Cancelled {
                attempts: self.attempts,
            }),
        }
    }
}

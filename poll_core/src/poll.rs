//! The polling primitive.

use poll_traits::Delay;

/// Poll `condition` until it returns true, sleeping `duration` between
/// attempts, for at most `delays` delays.
///
/// The condition is checked once before the first delay and once after the
/// last, so it runs at most `delays + 1` times and the delay runs at most
/// `delays` times. A true result returns immediately: no further polls, no
/// further delays. With `delays == 0` the condition is checked exactly once
/// and the delay is never invoked.
///
/// `duration` is handed to the delay verbatim; its unit is whatever the delay
/// says it is. When the condition never becomes true the call takes at least
/// `delays * duration`, with no upper bound beyond what the delay guarantees.
///
/// ```
/// use poll_core::timed_poll;
///
/// let mut calls = 0;
/// let mut slept = Vec::new();
/// let met = timed_poll(
///     || {
///         calls += 1;
///         calls == 3
///     },
///     5,
///     |ms: u32| slept.push(ms),
///     10,
/// );
/// assert!(met);
/// assert_eq!(calls, 3);
/// assert_eq!(slept, vec![10, 10]);
/// ```
pub fn timed_poll<U: Copy>(
    mut condition: impl FnMut() -> bool,
    delays: u32,
    mut delay_fn: impl Delay<U>,
    duration: U,
) -> bool {
    for _ in 0..delays {
        if condition() {
            return true;
        }
        delay_fn.delay(duration);
    }
    // Final poll after the last delay, or the only poll when delays == 0.
    condition()
}

/// [`timed_poll`] for conditions that can fail.
///
/// The schedule is identical. The first `Err` from `condition` is returned
/// as-is: no further polls, no further delays.
pub fn try_timed_poll<U: Copy, E>(
    mut condition: impl FnMut() -> Result<bool, E>,
    delays: u32,
    mut delay_fn: impl Delay<U>,
    duration: U,
) -> Result<bool, E> {
    for _ in 0..delays {
        if condition()? {
            return Ok(true);
        }
        delay_fn.delay(duration);
    }
    condition()
}

use std::time::Duration;

use poll_core::timed_poll;
use poll_core::util::delays_for;
use poll_traits::ThreadSleep;

use crate::error::{HwError, Result};

/// Wait until the provided `is_high` predicate becomes false (i.e., line goes low),
/// or a timeout expires. Sleeps `poll_interval` between checks to avoid CPU spinning.
///
/// The line is checked `ceil(timeout / poll_interval) + 1` times at most. A zero
/// `poll_interval` checks exactly once.
pub fn wait_until_low_with_timeout(
    mut is_high: impl FnMut() -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let delays = delays_for(timeout, poll_interval);
    if timed_poll(|| !is_high(), delays, ThreadSleep, poll_interval) {
        Ok(())
    } else {
        Err(HwError::DataReadyTimeout)
    }
}

//! Common time helpers for poll_core.

use std::time::Duration;

/// Number of `interval` delays needed to wait at least `timeout`.
/// - Rounds up, so `delays * interval >= timeout`.
/// - Saturates at `u32::MAX`.
/// - A zero interval yields 0 (a single poll).
#[inline]
pub fn delays_for(timeout: Duration, interval: Duration) -> u32 {
    let step = interval.as_nanos();
    if step == 0 {
        return 0;
    }
    u32::try_from(timeout.as_nanos().div_ceil(step)).unwrap_or(u32::MAX)
}

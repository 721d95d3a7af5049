// Focused tests for time helpers.
use std::time::Duration;

use poll_core::util::delays_for;

#[test]
fn delays_for_rounds_up() {
    assert_eq!(delays_for(Duration::from_secs(1), Duration::from_millis(100)), 10);
    assert_eq!(delays_for(Duration::from_millis(1001), Duration::from_millis(100)), 11);
    assert_eq!(delays_for(Duration::from_micros(1), Duration::from_secs(1)), 1);
    assert_eq!(delays_for(Duration::ZERO, Duration::from_secs(1)), 0);
}

#[test]
fn delays_for_zero_interval_is_single_poll() {
    assert_eq!(delays_for(Duration::from_secs(5), Duration::ZERO), 0);
}

#[test]
fn delays_for_saturates() {
    assert_eq!(
        delays_for(Duration::from_secs(u64::MAX), Duration::from_nanos(1)),
        u32::MAX
    );
}

use poll_core::mocks::{RecordingDelay, ScriptedCondition};
use poll_core::timed_poll;
use poll_traits::Millis;
use rstest::rstest;

#[rstest]
#[case::never(ScriptedCondition::never(), false)]
#[case::always(ScriptedCondition::always(), true)]
fn zero_delays_polls_exactly_once(#[case] cond: ScriptedCondition, #[case] expected: bool) {
    let delay = RecordingDelay::<u32>::new();
    let met = timed_poll(cond.check(), 0, delay.delay_fn(), 10);
    assert_eq!(met, expected);
    assert_eq!(cond.calls(), 1);
    assert_eq!(delay.count(), 0);
}

#[test]
fn true_on_third_check_of_five_delays() {
    // poll(check, 5, delay, 10) with check true only from the 3rd call.
    let cond = ScriptedCondition::true_on(3);
    let delay = RecordingDelay::<u32>::new();
    let met = timed_poll(cond.check(), 5, delay.delay_fn(), 10);
    assert!(met);
    assert_eq!(cond.calls(), 3);
    assert_eq!(delay.amounts(), vec![10, 10]);
}

#[test]
fn always_false_ten_delays_of_one_hundred() {
    let cond = ScriptedCondition::never();
    let delay = RecordingDelay::<u32>::new();
    let met = timed_poll(cond.check(), 10, delay.delay_fn(), 100);
    assert!(!met);
    assert_eq!(cond.calls(), 11);
    assert_eq!(delay.amounts(), vec![100; 10]);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(5)]
fn true_on_k_stops_after_k(#[case] k: u64) {
    let n = 4u32;
    let cond = ScriptedCondition::true_on(k);
    let delay = RecordingDelay::<Millis>::new();
    let met = timed_poll(cond.check(), n, delay.delay_fn(), Millis(7));
    assert!(met);
    assert_eq!(cond.calls(), k);
    assert_eq!(delay.count() as u64, k - 1);
    assert!(delay.amounts().iter().all(|&d| d == Millis(7)));
}

#[test]
fn true_only_on_final_poll_uses_every_delay() {
    let cond = ScriptedCondition::true_on(6);
    let delay = RecordingDelay::<u32>::new();
    assert!(timed_poll(cond.check(), 5, delay.delay_fn(), 1));
    assert_eq!(cond.calls(), 6);
    assert_eq!(delay.count(), 5);
}

#[test]
fn repeated_calls_share_no_state() {
    let first = ScriptedCondition::never();
    let first_delay = RecordingDelay::<u32>::new();
    let second = ScriptedCondition::never();
    let second_delay = RecordingDelay::<u32>::new();

    let a = timed_poll(first.check(), 3, first_delay.delay_fn(), 5);
    let b = timed_poll(second.check(), 3, second_delay.delay_fn(), 5);

    assert_eq!(a, b);
    assert!(!a);
    assert_eq!(first.calls(), second.calls());
    assert_eq!(first_delay.amounts(), second_delay.amounts());
}

#[test]
fn max_delay_count_with_immediate_success() {
    let cond = ScriptedCondition::always();
    let delay = RecordingDelay::<u32>::new();
    assert!(timed_poll(cond.check(), u32::MAX, delay.delay_fn(), 1));
    assert_eq!(cond.calls(), 1);
    assert_eq!(delay.count(), 0);
}

#[test]
fn function_items_work_as_capabilities() {
    fn ready() -> bool {
        true
    }
    fn no_sleep(_us: u32) {}

    assert!(timed_poll(ready, 3, no_sleep, 250));
}

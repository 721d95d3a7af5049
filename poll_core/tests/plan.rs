use std::time::Duration;

use poll_core::mocks::{RecordingDelay, ScriptedCondition};
use poll_core::{PollError, PollOutcome, PollPlan};
use poll_traits::{ClockDelay, ManualClock, Micros, Millis};

#[test]
fn run_reports_exhaustion_with_counts() {
    let cond = ScriptedCondition::never();
    let delay = RecordingDelay::<Millis>::new();
    let report = PollPlan::new(10, Millis(100)).run(cond.check(), delay.delay_fn());
    assert_eq!(report.outcome, PollOutcome::Exhausted);
    assert_eq!(report.attempts, 11);
    assert_eq!(report.delays, 10);
    assert!(!report.is_met());
    assert_eq!(
        report.into_result(),
        Err(PollError::Exhausted { attempts: 11 })
    );
}

#[test]
fn run_reports_success_with_counts() {
    let cond = ScriptedCondition::true_on(3);
    let report = PollPlan::new(5, Micros(10)).run(cond.check(), |_: Micros| {});
    assert_eq!(report.outcome, PollOutcome::Met);
    assert_eq!((report.attempts, report.delays), (3, 2));
    assert!(report.into_result().is_ok());
}

#[test]
fn poll_matches_timed_poll() {
    let plan = PollPlan::new(2, 1u32);
    let cond = ScriptedCondition::never();
    assert!(!plan.poll(cond.check(), |_: u32| {}));
    assert_eq!(cond.calls(), 3);
}

#[test]
fn manual_clock_elapses_at_least_min_wait() {
    let clock = ManualClock::new();
    let plan = PollPlan::new(10, Millis(100));
    let cond = ScriptedCondition::never();
    let report = plan.run(cond.check(), ClockDelay::new(&clock));
    assert!(!report.is_met());
    assert_eq!(clock.elapsed(), plan.min_wait());
    assert_eq!(clock.elapsed(), Duration::from_secs(1));
}

#[test]
fn success_on_first_poll_takes_no_time() {
    let clock = ManualClock::new();
    let cond = ScriptedCondition::always();
    let report = PollPlan::new(10, Duration::from_millis(100)).run(cond.check(), ClockDelay::new(&clock));
    assert!(report.is_met());
    assert_eq!(clock.elapsed(), Duration::ZERO);
}

#[test]
fn try_run_propagates_condition_error_unchanged() {
    #[derive(Debug, PartialEq)]
    struct BusFault(u8);

    let mut calls = 0u32;
    let delay = RecordingDelay::<u32>::new();
    let res = PollPlan::new(5, 10u32).try_run(
        || {
            calls += 1;
            if calls == 2 { Err(BusFault(7)) } else { Ok(false) }
        },
        delay.delay_fn(),
    );
    assert_eq!(res, Err(BusFault(7)));
    assert_eq!(calls, 2);
    // One delay after the first false poll; none after the failure.
    assert_eq!(delay.count(), 1);
}

#[test]
fn try_run_reports_met() {
    let report = PollPlan::new(3, 1u32)
        .try_run(|| Ok::<_, std::io::Error>(true), |_: u32| {})
        .expect("no error");
    assert!(report.is_met());
    assert_eq!(report.attempts, 1);
}

#[test]
fn from_cfg_uses_configured_unit() {
    let cfg = poll_config::load_toml("[poll]\ndelays = 4\ninterval = 250\nunit = \"us\"\n")
        .expect("parse");
    let plan = PollPlan::from_cfg(&cfg.poll).expect("valid plan");
    assert_eq!(plan.delays(), 4);
    assert_eq!(plan.interval(), Duration::from_micros(250));
    assert_eq!(plan.min_wait(), Duration::from_millis(1));
}

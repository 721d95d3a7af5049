#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing, validation and plan construction must reject bad input without panicking.
    let Ok(cfg) = poll_config::load_toml(data) else {
        return;
    };
    if cfg.validate().is_ok() {
        // A validated config always yields a plan.
        let plan = poll_core::PollPlan::from_cfg(&cfg.poll);
        assert!(plan.is_ok(), "validated config rejected: {cfg:?}");
    }
});

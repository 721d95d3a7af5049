//! Wait for a (simulated) status register to report running.
//!
//! Optional first argument: path to a TOML file with `[poll]` and `[logging]`
//! sections. Without it the built-in one-second default is used.
//!
//! RUST_LOG overrides the configured level, e.g. `RUST_LOG=trace`.

use eyre::WrapErr;
use poll_core::PollPlan;
use poll_hardware::{SimulatedStatus, wait_for_running_with};
use poll_traits::{ClockDelay, MonotonicClock};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {path}"))?;
            poll_config::load_toml(&text).wrap_err("invalid config TOML")?
        }
        None => poll_config::Config::default(),
    };
    cfg.validate()?;

    let level = cfg.logging.level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let plan = PollPlan::from_cfg(&cfg.poll)?;
    tracing::info!(
        delays = plan.delays(),
        interval = ?plan.interval(),
        "waiting for device"
    );

    // Comes up on the fourth read.
    let mut status = SimulatedStatus::new(3, 0x01);
    let running = wait_for_running_with(&mut status, &plan, ClockDelay::new(MonotonicClock::new()))?;
    if running {
        tracing::info!(reads = status.reads(), "device running");
    } else {
        tracing::warn!(reads = status.reads(), "device did not start");
    }
    Ok(())
}

//! Waiting on a device status word.
//!
//! A device counts as running once its status reads non-zero. The default
//! schedule checks every 100 ms for up to one second (10 delays).

use poll_core::{PollPlan, PollReport};
use poll_traits::{Delay, Millis, StatusSource};

use crate::error::{HwError, Result};

/// 10 delays of 100 ms: 11 reads over at least one second.
pub const DEFAULT_RUNNING_PLAN: PollPlan<Millis> = PollPlan::new(10, Millis(100));

/// Wait up to one second for `source` to report a non-zero status.
///
/// `Ok(false)` means every read returned zero. A failed read ends the wait
/// and is returned as `HwError::Status`.
pub fn wait_for_running<S>(source: &mut S, delay_fn: impl Delay<Millis>) -> Result<bool>
where
    S: StatusSource + ?Sized,
{
    wait_for_running_with(source, &DEFAULT_RUNNING_PLAN, delay_fn)
}

/// [`wait_for_running`] with an explicit plan.
pub fn wait_for_running_with<S, U>(
    source: &mut S,
    plan: &PollPlan<U>,
    delay_fn: impl Delay<U>,
) -> Result<bool>
where
    S: StatusSource + ?Sized,
    U: Copy,
{
    let report = poll_status(source, plan, delay_fn)?;
    Ok(report.is_met())
}

/// Like [`wait_for_running_with`], but a device that never starts is an error.
pub fn ensure_running<S, U>(source: &mut S, plan: &PollPlan<U>, delay_fn: impl Delay<U>) -> Result<()>
where
    S: StatusSource + ?Sized,
    U: Copy,
{
    let report = poll_status(source, plan, delay_fn)?;
    if report.is_met() {
        Ok(())
    } else {
        Err(HwError::NotRunning {
            attempts: report.attempts,
        })
    }
}

fn poll_status<S, U>(source: &mut S, plan: &PollPlan<U>, delay_fn: impl Delay<U>) -> Result<PollReport>
where
    S: StatusSource + ?Sized,
    U: Copy,
{
    let report = plan.try_run(
        || match source.read_status() {
            Ok(status) => Ok(status != 0),
            Err(e) => {
                tracing::error!(error = %e, "status read failed");
                Err(HwError::Status(e))
            }
        },
        delay_fn,
    )?;
    if report.is_met() {
        tracing::debug!(attempts = report.attempts, "device running");
    } else {
        tracing::warn!(attempts = report.attempts, "device did not report running");
    }
    Ok(report)
}

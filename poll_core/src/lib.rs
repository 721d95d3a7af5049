#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Bounded-retry condition polling.
//!
//! Waits for a condition to become true without busy-spinning forever: check,
//! delay, check again, up to a fixed number of delays. The condition and the
//! delay are both supplied by the caller; the delay's argument type is the
//! unit (see `poll_traits::Millis`, `poll_traits::Micros`, or plain
//! `Duration`), so one loop serves every unit system.
//!
//! ## Architecture
//!
//! - **Primitive**: `timed_poll`/`try_timed_poll` (`poll` module)
//! - **Plans**: reusable delay count + interval with counting runs (`plan` module)
//! - **Reports**: outcome and call counts of a run (`report` module)
//! - **Cancellation**: cooperative stop between steps (`cancel` module)
//!
//! Nothing here spawns threads or keeps state between calls. A run blocks the
//! calling thread for as long as its delays do.

pub mod cancel;
pub mod error;
pub mod mocks;
pub mod plan;
pub mod poll;
pub mod report;
pub mod util;

pub use cancel::CancelToken;
pub use error::{BuildError, PollError};
pub use plan::{PollPlan, PollPlanBuilder};
pub use poll::{timed_poll, try_timed_poll};
pub use report::{PollOutcome, PollReport};

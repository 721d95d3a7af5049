#[cfg(all(feature = "hardware", target_os = "linux"))]
pub mod gpio;

pub mod error;
pub mod status;
pub mod util;

use poll_traits::StatusSource;

pub use status::{DEFAULT_RUNNING_PLAN, ensure_running, wait_for_running, wait_for_running_with};

/// Simulated status register.
///
/// Reads zero for the first `idle_reads` reads, then `running_value`.
/// Optionally fails a single read to exercise error paths.
#[derive(Debug, Clone)]
pub struct SimulatedStatus {
    idle_reads: u64,
    running_value: u32,
    fail_on: Option<u64>,
    reads: u64,
}

impl SimulatedStatus {
    pub fn new(idle_reads: u64, running_value: u32) -> Self {
        SimulatedStatus {
            idle_reads,
            running_value,
            fail_on: None,
            reads: 0,
        }
    }

    /// A device that never leaves idle.
    pub fn idle() -> Self {
        Self::new(u64::MAX, 0)
    }

    /// Fail the `n`-th read (1-indexed) with a bus error.
    pub fn failing_on(mut self, n: u64) -> Self {
        self.fail_on = Some(n);
        self
    }

    /// Number of reads so far, including failed ones.
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl StatusSource for SimulatedStatus {
    fn read_status(&mut self) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        self.reads += 1;
        if self.fail_on == Some(self.reads) {
            return Err(Box::new(std::io::Error::other("simulated bus error")));
        }
        let status = if self.reads > self.idle_reads {
            self.running_value
        } else {
            0
        };
        tracing::trace!(read = self.reads, status, "status read (simulated)");
        Ok(status)
    }
}

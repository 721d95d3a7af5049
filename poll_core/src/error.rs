use thiserror::Error;

/// A finished poll whose condition never became true.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PollError {
    #[error("condition not met after {attempts} attempts")]
    Exhausted { attempts: u64 },
    #[error("poll cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing interval")]
    MissingInterval,
    #[error("interval must be > 0 when delays > 0")]
    ZeroInterval,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;

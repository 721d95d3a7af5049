use thiserror::Error;

#[derive(Debug, Error)]
pub enum HwError {
    #[error("gpio error: {0}")]
    Gpio(String),
    #[error("status read failed: {0}")]
    Status(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("device not running after {attempts} status reads")]
    NotRunning { attempts: u64 },
    #[error("data-ready timeout")]
    DataReadyTimeout,
}

pub type Result<T> = std::result::Result<T, HwError>;

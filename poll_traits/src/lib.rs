pub mod clock;
pub mod delay;
pub mod units;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use delay::{ClockDelay, Delay, ThreadSleep};
pub use units::{Micros, Millis};

/// A readable status word, e.g. a peripheral status register.
///
/// Zero means "idle"; any other value is device-defined.
pub trait StatusSource {
    fn read_status(&mut self) -> Result<u32, Box<dyn std::error::Error + Send + Sync>>;
}

impl<S: StatusSource + ?Sized> StatusSource for Box<S> {
    fn read_status(&mut self) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        (**self).read_status()
    }
}

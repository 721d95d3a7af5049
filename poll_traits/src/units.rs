//! Typed delay units.
//!
//! A delay function decides what its argument means. These newtypes let the
//! two common embedded conventions (millisecond and microsecond counts) share
//! one poller while keeping the unit visible in the type.

use std::time::Duration;

/// A delay amount in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(pub u32);

/// A delay amount in microseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Micros(pub u32);

impl From<Millis> for Duration {
    #[inline]
    fn from(ms: Millis) -> Self {
        Duration::from_millis(u64::from(ms.0))
    }
}

impl From<Micros> for Duration {
    #[inline]
    fn from(us: Micros) -> Self {
        Duration::from_micros(u64::from(us.0))
    }
}

impl core::fmt::Display for Millis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl core::fmt::Display for Micros {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}us", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Millis(0), Duration::ZERO)]
    #[case(Millis(100), Duration::from_millis(100))]
    #[case(Millis(u32::MAX), Duration::from_millis(u64::from(u32::MAX)))]
    fn millis_into_duration(#[case] ms: Millis, #[case] expected: Duration) {
        assert_eq!(Duration::from(ms), expected);
    }

    #[rstest]
    #[case(Micros(0), Duration::ZERO)]
    #[case(Micros(250), Duration::from_micros(250))]
    fn micros_into_duration(#[case] us: Micros, #[case] expected: Duration) {
        assert_eq!(Duration::from(us), expected);
    }

    #[test]
    fn display_carries_unit() {
        assert_eq!(Millis(10).to_string(), "10ms");
        assert_eq!(Micros(10).to_string(), "10us");
    }
}

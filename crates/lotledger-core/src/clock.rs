//! Injectable time source.
//!
//! The ledger stamps batches and sale records with a creation time. The
//! clock is a trait so tests can pin timestamps and make ledger state fully
//! deterministic.

use chrono::{DateTime, Utc};

/// A source of timestamps for batch creation and sales.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock. Default for production ledgers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed clock at the unix epoch.
    #[must_use]
    pub fn epoch() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_constant() {
        let clock = FixedClock::epoch();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), DateTime::UNIX_EPOCH);
    }
}

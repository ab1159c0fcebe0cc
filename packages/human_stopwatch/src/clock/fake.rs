//! Fake clock for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::Clock;

/// Fake implementation of [`Clock`] whose time only moves when a test moves it.
///
/// Clones share the same underlying time, so a test can hand one clone to the code
/// under test and advance time through another clone while that code is running.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeClock {
    nanos: Arc<Mutex<u64>>,
}

impl FakeClock {
    /// Creates a fake clock that reads zero.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `nanos`.
    pub(crate) fn advance_nanos(&self, nanos: u64) {
        let mut now = self
            .nanos
            .lock()
            .expect("FakeClock state lock should not be poisoned");

        *now = now
            .checked_add(nanos)
            .expect("fake clock advanced beyond u64 nanoseconds - test is unrealistic");
    }

    /// Moves time forward by `duration`.
    pub(crate) fn advance(&self, duration: Duration) {
        self.advance_nanos(
            duration
                .as_nanos()
                .try_into()
                .expect("fake clock advanced beyond u64 nanoseconds - test is unrealistic"),
        );
    }

    /// Sets the clock to an absolute reading, which may move time backwards.
    pub(crate) fn set_nanos(&self, nanos: u64) {
        *self
            .nanos
            .lock()
            .expect("FakeClock state lock should not be poisoned") = nanos;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> u64 {
        *self
            .nanos
            .lock()
            .expect("FakeClock state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero() {
        assert_eq!(FakeClock::new().now(), 0);
    }

    #[test]
    fn advances() {
        let clock = FakeClock::new();
        clock.advance_nanos(500);
        clock.advance(Duration::from_micros(2));

        assert_eq!(clock.now(), 2_500);
    }

    #[test]
    fn can_go_backwards() {
        let clock = FakeClock::new();
        clock.set_nanos(1_000);
        clock.set_nanos(10);

        assert_eq!(clock.now(), 10);
    }

    #[test]
    fn shared_state_between_clones() {
        let clock1 = FakeClock::new();
        let clock2 = clock1.clone();

        clock1.advance_nanos(100);
        assert_eq!(clock2.now(), 100);
    }
}

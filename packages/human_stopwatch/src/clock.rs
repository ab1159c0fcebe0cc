//! Monotonic time sources for stopwatches.
//!
//! The [`Clock`] trait is the single seam through which a [`Stopwatch`](crate::Stopwatch)
//! reads time. Production code uses [`SystemClock`]; tests swap in a deterministic clock.

use std::fmt::Debug;

#[cfg(test)]
mod fake;
mod system;

#[cfg(test)]
pub(crate) use fake::FakeClock;
pub use system::SystemClock;

/// Provides monotonic timestamps in nanoseconds.
///
/// Readings from one clock instance are expected to be non-decreasing. The absolute value
/// of a reading carries no meaning, only the difference between two readings of the same
/// clock does.
///
/// A clock that violates monotonicity is tolerated: the resulting elapsed time is negative
/// and is still rendered, with a leading minus sign.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Debug {
    /// Returns the current timestamp in nanoseconds.
    fn now(&self) -> u64;
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> u64 {
        (**self).now()
    }
}

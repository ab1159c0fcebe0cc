use crate::error::Result;
use crate::template::substitute;
use crate::{Clock, Error, HumanDuration, SystemClock};

/// Measures the time between its creation and a call to [`stop()`](Self::stop).
///
/// The start reading is taken from the clock when the stopwatch is created and never
/// changes. Each call to `stop()` takes a fresh reading and replaces any previous one, so
/// the last call wins.
///
/// # Examples
///
/// ```
/// use human_stopwatch::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
/// // ... the work being timed ...
/// let line = stopwatch.stop().format("time taken to eat breakfast: %s")?;
///
/// assert!(line.starts_with("time taken to eat breakfast: "));
/// # Ok::<(), human_stopwatch::Error>(())
/// ```
///
/// Any [`Clock`] can be supplied, which allows time to be controlled in tests:
///
/// ```
/// use std::cell::Cell;
///
/// use human_stopwatch::{Clock, Stopwatch};
///
/// #[derive(Debug, Default)]
/// struct ManualClock(Cell<u64>);
///
/// impl Clock for ManualClock {
///     fn now(&self) -> u64 {
///         self.0.get()
///     }
/// }
///
/// let clock = ManualClock::default();
/// let mut stopwatch = Stopwatch::with_clock(&clock);
/// clock.0.set(1_500_000_000);
///
/// assert_eq!(stopwatch.stop().format("%s")?, "1.50 s");
/// # Ok::<(), human_stopwatch::Error>(())
/// ```
#[derive(Debug)]
pub struct Stopwatch<C = SystemClock>
where
    C: Clock,
{
    clock: C,
    start: u64,
    stop: Option<u64>,
}

impl Stopwatch<SystemClock> {
    /// Starts a stopwatch on the system monotonic clock.
    #[expect(
        clippy::new_without_default,
        reason = "creating a stopwatch starts timing, which is not what a default value should do"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C> Stopwatch<C>
where
    C: Clock,
{
    /// Starts a stopwatch that reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now();

        Self {
            clock,
            start,
            stop: None,
        }
    }

    /// Takes the stop reading, replacing any earlier one.
    ///
    /// Returns the same stopwatch so the measurement can be read in the same expression.
    pub fn stop(&mut self) -> &mut Self {
        self.stop = Some(self.clock.now());
        self
    }

    /// Whether [`stop()`](Self::stop) has been called at least once.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_some()
    }

    /// The signed number of nanoseconds between the start and stop readings.
    ///
    /// The value is negative only if the clock went backwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStopped`] if [`stop()`](Self::stop) was never called.
    pub fn elapsed_nanos(&self) -> Result<i128> {
        let stop = self.stop.ok_or(Error::NotStopped)?;
        Ok(difference(self.start, stop))
    }

    /// The time between the start and stop readings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStopped`] if [`stop()`](Self::stop) was never called.
    pub fn elapsed(&self) -> Result<HumanDuration> {
        self.elapsed_nanos().map(HumanDuration::from_nanos)
    }

    /// Renders the elapsed time into `template`.
    ///
    /// The first [`PLACEHOLDER`](crate::PLACEHOLDER) (`%s`) is replaced by the rendered
    /// duration and `%%` becomes a literal `%`. A template without a placeholder yields the
    /// rendered duration alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStopped`] if [`stop()`](Self::stop) was never called.
    pub fn format(&self, template: &str) -> Result<String> {
        let elapsed = self.elapsed()?;
        Ok(substitute(template, &elapsed.to_string()))
    }

    /// Stops the stopwatch and returns the elapsed time.
    #[must_use]
    pub fn finish(self) -> HumanDuration {
        let stop = self.clock.now();
        HumanDuration::from_nanos(difference(self.start, stop))
    }
}

fn difference(start: u64, stop: u64) -> i128 {
    i128::from(stop)
        .checked_sub(i128::from(start))
        .expect("the difference of two u64 readings always fits in i128")
}

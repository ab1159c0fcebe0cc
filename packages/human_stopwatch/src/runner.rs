use std::fmt;

use crate::{Clock, Measurement, Sink, Stopwatch, SystemClock, TracingSink};

/// The label used by [`Runner::time()`] and [`time()`].
pub const DEFAULT_LABEL: &str = "time dump";

/// Times operations end to end and emits one [`Measurement`] per operation.
///
/// By default time is read from the [`SystemClock`] and measurements are emitted as
/// `tracing` events through [`TracingSink`]. Both can be replaced with the `with_*` methods.
///
/// The measurement is emitted even if the operation panics, after which the panic
/// continues unchanged. A sink that itself panics while a panic is unwinding aborts the
/// process.
///
/// # Examples
///
/// ```
/// use human_stopwatch::{Runner, StdoutSink};
///
/// let runner = Runner::new().with_sink(StdoutSink);
///
/// // Prints "attribute a = ..." and returns the value of the closure.
/// let value = runner.time_labeled("attribute a", || "bob".to_uppercase());
///
/// assert_eq!(value, "BOB");
/// ```
pub struct Runner<C = SystemClock, S = TracingSink> {
    clock: C,
    sink: S,
}

impl Runner {
    /// Creates a runner on the system clock that emits through [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: SystemClock::new(),
            sink: TracingSink,
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S> Runner<C, S>
where
    C: Clock,
    S: Sink,
{
    /// Replaces the clock that operations are timed with.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> Runner<C2, S>
    where
        C2: Clock,
    {
        Runner {
            clock,
            sink: self.sink,
        }
    }

    /// Replaces the destination of measurements.
    #[must_use]
    pub fn with_sink<S2>(self, sink: S2) -> Runner<C, S2>
    where
        S2: Sink,
    {
        Runner {
            clock: self.clock,
            sink,
        }
    }

    /// Times `operation` under [`DEFAULT_LABEL`] and returns its result unchanged.
    pub fn time<T>(&self, operation: impl FnOnce() -> T) -> T {
        self.time_labeled(DEFAULT_LABEL, operation)
    }

    /// Times `operation` under `label` and returns its result unchanged.
    ///
    /// The operation is called exactly once. Exactly one measurement is emitted, after the
    /// operation has returned or panicked.
    pub fn time_labeled<T>(&self, label: &str, operation: impl FnOnce() -> T) -> T {
        let stopwatch = Stopwatch::with_clock(&self.clock);

        let _emit_on_exit = scopeguard::guard(stopwatch, |stopwatch| {
            self.sink.emit(&Measurement::new(label, stopwatch.finish()));
        });

        operation()
    }
}

impl<C, S> fmt::Debug for Runner<C, S>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Times `operation` on the system clock, logs the measurement under [`DEFAULT_LABEL`]
/// through [`TracingSink`] and returns the result of the operation unchanged.
pub fn time<T>(operation: impl FnOnce() -> T) -> T {
    Runner::new().time(operation)
}

/// Times `operation` on the system clock, logs the measurement under `label` through
/// [`TracingSink`] and returns the result of the operation unchanged.
pub fn time_labeled<T>(label: &str, operation: impl FnOnce() -> T) -> T {
    Runner::new().time_labeled(label, operation)
}

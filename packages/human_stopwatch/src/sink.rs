//! Destinations for measurements emitted by a [`Runner`](crate::Runner).

use crate::Measurement;

/// Receives each measurement a [`Runner`](crate::Runner) takes.
///
/// Any `Fn(&Measurement<'_>)` closure is a sink, which is the simplest way to capture
/// measurements in tests:
///
/// ```
/// use std::cell::RefCell;
///
/// use human_stopwatch::{Measurement, Runner};
///
/// let lines = RefCell::new(Vec::new());
/// let runner = Runner::new().with_sink(|m: &Measurement<'_>| lines.borrow_mut().push(m.to_string()));
///
/// runner.time_labeled("sum", || (1..=10).sum::<u32>());
///
/// assert!(lines.borrow()[0].starts_with("sum = "));
/// ```
pub trait Sink {
    /// Emits one measurement.
    fn emit(&self, measurement: &Measurement<'_>);
}

impl<F> Sink for F
where
    F: Fn(&Measurement<'_>),
{
    fn emit(&self, measurement: &Measurement<'_>) {
        self(measurement);
    }
}

/// Emits measurements as `tracing` events at the `INFO` level.
///
/// The event carries the label and the signed elapsed nanoseconds as structured fields
/// and the rendered line as its message. Nothing is recorded unless the application has
/// installed a `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, measurement: &Measurement<'_>) {
        tracing::info!(
            label = measurement.label(),
            elapsed_ns = measurement.elapsed().as_nanos(),
            "{measurement}"
        );
    }
}

/// Prints each measurement as one line on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    fn emit(&self, measurement: &Measurement<'_>) {
        println!("{measurement}");
    }
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A single-shot stopwatch that renders elapsed time in a human-scaled unit.
//!
//! The core functionality includes:
//! - [`Stopwatch`] - Captures a start reading on creation and a stop reading on demand
//! - [`HumanDuration`] - Renders a nanosecond duration as `ns`, `μs`, `ms`, `s` or a long form
//! - [`Runner`] - Times a closure and emits one [`Measurement`] through a [`Sink`]
//! - [`Clock`] - The time source, replaceable for deterministic tests
//!
//! # Stopwatch
//!
//! ```
//! use human_stopwatch::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new();
//! let total: u64 = (1..=1000).sum();
//! let line = stopwatch.stop().format("summing took %s")?;
//!
//! println!("{total}: {line}");
//! # Ok::<(), human_stopwatch::Error>(())
//! ```
//!
//! # Unit ladder
//!
//! Durations below one microsecond are shown as integer nanoseconds. Larger durations are
//! scaled to microseconds, milliseconds or seconds with two decimals, choosing the first unit
//! in which the value stays below 1000. From 1000 seconds onwards the long form
//! `[HH:]MM:SS[.mmm]` is used.
//!
//! ```
//! use human_stopwatch::HumanDuration;
//!
//! assert_eq!(HumanDuration::from_nanos(999).to_string(), "999 ns");
//! assert_eq!(HumanDuration::from_nanos(1_000).to_string(), "1.00 μs");
//! assert_eq!(HumanDuration::from_nanos(999_999).to_string(), "1.00 ms");
//! assert_eq!(HumanDuration::from_nanos(1_500_000_000).to_string(), "1.50 s");
//! assert_eq!(HumanDuration::from_nanos(1_000_000_000_000).to_string(), "16:40");
//! ```
//!
//! # Timing closures
//!
//! ```
//! use human_stopwatch::{Runner, StdoutSink};
//!
//! let runner = Runner::new().with_sink(StdoutSink);
//!
//! // Prints "attribute b = <elapsed>" and hands back the closure's result.
//! let name = runner.time_labeled("attribute b", || String::from("bob"));
//! assert_eq!(name, "bob");
//! ```
//!
//! By default a [`Runner`] emits through [`TracingSink`], so measurements end up wherever the
//! application's `tracing` subscriber sends them.
//!
//! # Threading
//!
//! A stopwatch belongs to the code section it times. Concurrent timings each use their own
//! stopwatch; no state is shared between instances.

mod clock;
mod error;
mod human_duration;
mod measurement;
mod runner;
mod sink;
mod stopwatch;
mod template;

pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use human_duration::HumanDuration;
pub use measurement::Measurement;
pub use runner::{DEFAULT_LABEL, Runner, time, time_labeled};
pub use sink::{Sink, StdoutSink, TracingSink};
pub use stopwatch::Stopwatch;
pub use template::PLACEHOLDER;

//! Times a few operations and logs how long each took.
//!
//! Run with: `cargo run --example human_stopwatch_basic`.

use std::thread;
use std::time::Duration;

use human_stopwatch::{Runner, StdoutSink, Stopwatch, time_labeled};

fn main() -> Result<(), human_stopwatch::Error> {
    tracing_subscriber::fmt().init();

    // Free functions emit through `tracing`.
    let greeting = time_labeled("attribute a", || {
        thread::sleep(Duration::from_millis(15));
        "bob"
    });

    // A runner can print to stdout instead.
    let runner = Runner::new().with_sink(StdoutSink);
    let total = runner.time_labeled("attribute b", || (1..=1_000_u64).sum::<u64>());
    runner.time(|| thread::sleep(Duration::from_micros(300)));

    // A stopwatch can be read directly.
    let mut stopwatch = Stopwatch::new();
    thread::sleep(Duration::from_millis(1));
    println!("{}", stopwatch.stop().format("time taken to eat breakfast: %s")?);

    println!("{greeting} summed to {total}");

    Ok(())
}

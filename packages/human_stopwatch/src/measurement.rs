use std::fmt;

use crate::HumanDuration;

/// One labeled timing result, as handed to a [`Sink`](crate::Sink).
///
/// Displays as `"<label> = <elapsed>"`, for example `"attribute a = 1.00 s"`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement<'a> {
    label: &'a str,
    elapsed: HumanDuration,
}

impl<'a> Measurement<'a> {
    /// Creates a measurement of `elapsed` time under `label`.
    #[must_use]
    pub fn new(label: &'a str, elapsed: HumanDuration) -> Self {
        Self { label, elapsed }
    }

    /// The caller-supplied label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// The measured time.
    #[must_use]
    pub fn elapsed(&self) -> HumanDuration {
        self.elapsed
    }
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.elapsed)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn displays_label_and_elapsed() {
        let measurement = Measurement::new("attribute a", HumanDuration::from_nanos(1_000_000_000));

        assert_eq!(measurement.to_string(), "attribute a = 1.00 s");
    }

    #[test]
    fn accessors() {
        let measurement = Measurement::new("x", HumanDuration::from_nanos(12));

        assert_eq!(measurement.label(), "x");
        assert_eq!(measurement.elapsed().as_nanos(), 12);
    }
}

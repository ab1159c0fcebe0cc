use std::fmt;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Every tier holds values strictly below this many of its own unit.
const TIER_LIMIT: u128 = 1_000;

/// Scaled tiers rendered with two decimals, smallest first.
///
/// Values below one microsecond are rendered as integer nanoseconds and values that do not
/// fit into the last tier fall back to the long form.
const SCALED_TIERS: [(u128, &str); 3] = [
    (NANOS_PER_MICRO, "μs"),
    (NANOS_PER_MILLI, "ms"),
    (NANOS_PER_SECOND, "s"),
];

/// A signed duration in nanoseconds whose [`Display`](fmt::Display) output is scaled to
/// a human-readable unit.
///
/// | Magnitude                  | Output                          |
/// |----------------------------|---------------------------------|
/// | below 1 μs                 | `"999 ns"`                      |
/// | below 1000 μs              | `"1.23 μs"`                     |
/// | below 1000 ms              | `"1.23 ms"`                     |
/// | below 1000 s               | `"1.23 s"`                      |
/// | 1000 s and above           | `"16:40"`, `"01:02:03.004"`     |
///
/// Scaled values are rounded half-up to two decimals using integer arithmetic. A value that
/// would round up to `1000.00` of a unit is rendered in the next unit instead, so the output
/// never shows four integer digits in a scaled tier.
///
/// The long form is `[HH:]MM:SS[.mmm]`: hours appear only when non-zero and milliseconds
/// (truncated) only when non-zero.
///
/// Negative durations are rendered as a `-` followed by the rendering of the magnitude.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use human_stopwatch::HumanDuration;
///
/// assert_eq!(HumanDuration::from_nanos(500).to_string(), "500 ns");
/// assert_eq!(HumanDuration::from(Duration::from_millis(1500)).to_string(), "1.50 s");
/// assert_eq!(HumanDuration::from(Duration::from_secs(3723)).to_string(), "01:02:03");
/// assert_eq!(HumanDuration::from_nanos(-1_000).to_string(), "-1.00 μs");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HumanDuration {
    nanos: i128,
}

impl HumanDuration {
    /// A duration of zero nanoseconds.
    pub const ZERO: Self = Self { nanos: 0 };

    /// Creates a duration from a signed number of nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: i128) -> Self {
        Self { nanos }
    }

    /// The signed number of nanoseconds in this duration.
    #[must_use]
    pub const fn as_nanos(&self) -> i128 {
        self.nanos
    }

    /// Whether the duration is below zero, which only happens when the clock went backwards.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nanos < 0
    }
}

impl From<Duration> for HumanDuration {
    fn from(duration: Duration) -> Self {
        Self::from_nanos(
            duration
                .as_nanos()
                .try_into()
                .expect("Duration::MAX in nanoseconds is far below i128::MAX"),
        )
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        write_magnitude(f, self.nanos.unsigned_abs())
    }
}

#[allow(
    clippy::arithmetic_side_effects,
    clippy::integer_division,
    reason = "divisors are non-zero constants and multiplications are bounded by the tier limit check"
)]
fn write_magnitude(f: &mut fmt::Formatter<'_>, nanos: u128) -> fmt::Result {
    if nanos < TIER_LIMIT {
        return write!(f, "{nanos} ns");
    }

    for (divisor, unit) in SCALED_TIERS {
        if nanos < TIER_LIMIT * divisor {
            let hundredths = (nanos * 100 + divisor / 2) / divisor;

            if hundredths < TIER_LIMIT * 100 {
                return write!(f, "{}.{:02} {unit}", hundredths / 100, hundredths % 100);
            }
        }
    }

    write_long_form(f, nanos)
}

#[allow(
    clippy::arithmetic_side_effects,
    clippy::integer_division,
    reason = "divisors are non-zero constants"
)]
fn write_long_form(f: &mut fmt::Formatter<'_>, nanos: u128) -> fmt::Result {
    let total_millis = nanos / NANOS_PER_MILLI;
    let millis = total_millis % 1_000;

    let total_seconds = total_millis / 1_000;
    let hours = total_seconds / 3_600;
    let minutes = total_seconds % 3_600 / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        write!(f, "{hours:02}:")?;
    }

    write!(f, "{minutes:02}:{seconds:02}")?;

    if millis > 0 {
        write!(f, ".{millis:03}")?;
    }

    Ok(())
}

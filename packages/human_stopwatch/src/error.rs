use thiserror::Error;

/// Errors that can occur when reading a measurement from a [`Stopwatch`](crate::Stopwatch).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The elapsed time was requested before [`Stopwatch::stop()`](crate::Stopwatch::stop)
    /// was ever called, so there is no end point to measure to.
    #[error("stopwatch has not been stopped, there is no elapsed time to read")]
    NotStopped,
}

/// A specialized `Result` type for stopwatch operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

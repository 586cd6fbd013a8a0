//! Error types for tidings.
//!
//! - [`TidingsError`] - Top-level error type
//! - [`InvalidArgument`] - Rejected `bind` arguments
//! - [`BoxError`] - Failures raised by handlers, passed through untouched

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all tidings operations.
#[derive(Error, Debug)]
pub enum TidingsError {
    /// A `bind` call was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// A handler failed during `trigger`.
    #[error(transparent)]
    Handler(BoxError),
}

/// Arguments rejected by `bind`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The event spec was empty.
    #[error("invalid argument: event must be specified")]
    MissingEvent,

    /// The event spec carried a namespace but no event name.
    #[error("invalid argument: event spec `{spec}` has an empty event name")]
    EmptyName {
        /// The rejected spec, verbatim.
        spec: String,
    },
}

impl From<BoxError> for TidingsError {
    fn from(err: BoxError) -> Self {
        TidingsError::Handler(err)
    }
}

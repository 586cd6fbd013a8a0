//! Outcome conversion for handler return values.

use crate::error::BoxError;

/// Trait for converting a handler closure's return value into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), E>` → success, or `E` boxed as-is
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoOutcome`",
    label = "handlers must return `()` or `Result<(), E>`",
    note = "`E` must convert into `BoxError`."
)]
pub trait IntoOutcome {
    /// Convert the value into a dispatch outcome.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

//! Result-flag calling convention.
//!
//! Every validating operation in the engine exists in two forms: a standard
//! form returning `Result<T, GraphError>`, and a checked form returning
//! [`Checked<T>`], which never fails the call. Both forms run the same
//! internal implementation, so their diagnostics are always equivalent.

use crate::errors::GraphError;

/// Outcome of a checked operation: a success flag, the output value, and a
/// human readable diagnostic.
///
/// On failure the value is `T::default()` (an empty or zero-sized result,
/// never a partial one) and the diagnostic carries the rendered error; on
/// success the diagnostic is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// The produced value, or `T::default()` on failure.
    pub value: T,
    /// Rendered error text, empty on success.
    pub diagnostic: String,
}

impl<T: Default> Checked<T> {
    /// Wraps a successful value.
    pub fn success(value: T) -> Self {
        Self {
            ok: true,
            value,
            diagnostic: String::new(),
        }
    }

    /// Wraps a failure, discarding any partial output.
    pub fn failure(error: &GraphError) -> Self {
        Self {
            ok: false,
            value: T::default(),
            diagnostic: error.to_string(),
        }
    }

    /// Adapts a standard-form result into the result-flag form.
    pub fn from_result(result: Result<T, GraphError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(&error),
        }
    }
}

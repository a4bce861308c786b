//! Logged conversions between [`Outcome`] and [`Optional`].
//!
//! Each conversion that drops a failure records it with `tracing` first, so
//! swallowing an error is never silent.

use std::fmt::Display;

use crate::optional::Optional;
use crate::outcome::Outcome;

/// Extension trait for handing off an [`Outcome`] when the caller only cares
/// about the success value.
pub trait OutcomeExt<T, E> {
    /// Keep the success value, logging and discarding a failure.
    fn into_optional_logged(self) -> Optional<T>;

    /// Get the success value or `default`, logging a failure.
    fn value_or_logged(self, default: T) -> T;

    /// Inspect the error without consuming the outcome.
    #[must_use]
    fn inspect_failure<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E: Display> OutcomeExt<T, E> for Outcome<T, E> {
    fn into_optional_logged(self) -> Optional<T> {
        match self.into_result() {
            Ok(value) => Optional::new(value),
            Err(e) => {
                tracing::warn!("Operation failed: {}", e);
                Optional::empty()
            }
        }
    }

    fn value_or_logged(self, default: T) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }

    fn inspect_failure<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(e) = self.as_result() {
            f(e);
        }
        self
    }
}

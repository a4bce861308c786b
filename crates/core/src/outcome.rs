//! A success value or an error value, never both, never neither.
//!
//! [`Outcome`] carries an expected failure without exceptions. Which variant it
//! holds is chosen at construction and never changes. Reading the wrong
//! variant is a caller bug and goes through [`crate::contract::violated`].

use std::fmt;

use crate::contract;
use crate::error::Violation;

/// Holds exactly one of a success value `T` or an error value `E`.
///
/// Storage is the native sum type, so only the live payload is ever
/// constructed or dropped.
///
/// `Outcome` is deliberately not `Clone`, has no equality or ordering and no
/// default. Build one with [`Outcome::success`] or [`Outcome::failure`]:
///
/// ```
/// use carrier_core::Outcome;
///
/// let found: Outcome<u32, String> = Outcome::success(42);
/// assert!(found.is_success());
/// assert_eq!(found.value(), 42);
///
/// let missing: Outcome<u32, String> = Outcome::failure("not found".to_string());
/// assert!(missing.is_failure());
/// assert_eq!(missing.error_ref(), "not found");
/// ```
///
/// Named constructors keep the variant unambiguous even when `T` and `E` are
/// the same type:
///
/// ```
/// use carrier_core::Outcome;
///
/// let outcome: Outcome<String, String> = Outcome::failure("boom".to_string());
/// assert!(!outcome.is_success());
/// ```
///
/// ```compile_fail
/// use carrier_core::Outcome;
///
/// let outcome: Outcome<u32, String> = Outcome::success(1);
/// let copy = outcome.clone();
/// ```
///
/// # Thread safety
///
/// No internal synchronization. `Outcome<T, E>` is `Send`/`Sync` exactly when
/// both payloads are; sharing one across threads needs external locking like
/// any other plain value.
#[must_use = "an Outcome may be a failure, which should be handled"]
pub struct Outcome<T, E> {
    inner: Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// Build a successful outcome owning `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Build a failed outcome owning `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self { inner: Err(error) }
    }

    /// True iff this holds a success value.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// True iff this holds an error value.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Contract violation if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => contract::violated(Violation::value_of_failure::<Self>()),
        }
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Contract violation if this is a failure.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn value_ref(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(_) => contract::violated(Violation::value_of_failure::<Self>()),
        }
    }

    /// Take the error value.
    ///
    /// # Panics
    ///
    /// Contract violation if this is a success.
    #[inline]
    #[track_caller]
    pub fn error(self) -> E {
        match self.inner {
            Err(error) => error,
            Ok(_) => contract::violated(Violation::error_of_success::<Self>()),
        }
    }

    /// Borrow the error value.
    ///
    /// # Panics
    ///
    /// Contract violation if this is a success.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn error_ref(&self) -> &E {
        match &self.inner {
            Err(error) => error,
            Ok(_) => contract::violated(Violation::error_of_success::<Self>()),
        }
    }

    /// Branch on the variant without consuming or risking a violation.
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &E> {
        self.inner.as_ref()
    }

    /// Hand the payload over to the native `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(inner: Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.inner
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

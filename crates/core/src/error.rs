//! Error types for carrier.
//!
//! Two channels, never mixed:
//! - [`Error`] is the recoverable, typed failure of carrier's own fallible
//!   operations (configuration loading and installation).
//! - [`Violation`] describes a caller bug. It is only ever handed to
//!   [`crate::contract::violated`], which does not return.

use thiserror::Error;

use crate::config::ViolationPolicy;

/// Result type for carrier's own fallible operations.
pub type CarrierResult<T> = std::result::Result<T, Error>;

/// Recoverable errors raised by carrier itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown contract violation policy '{value}' (expected 'panic' or 'abort')")]
    InvalidPolicy { value: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("contract policy already installed as '{installed}'")]
    PolicyAlreadyInstalled { installed: ViolationPolicy },
}

impl Error {
    /// Create an invalid policy error.
    pub fn invalid_policy(value: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            value: value.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPolicy { .. } => "INVALID_POLICY",
            Self::TomlParseFailed { .. } => "TOML_PARSE_FAILED",
            Self::PolicyAlreadyInstalled { .. } => "POLICY_ALREADY_INSTALLED",
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::toml_parse_failed(err.to_string())
    }
}

/// A breach of a precondition by calling code.
///
/// `container` is the full type name of the holder that was misused, so the
/// diagnostic names the concrete payload types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("success value requested from a failed {container}")]
    ValueOfFailure { container: &'static str },

    #[error("error requested from a successful {container}")]
    ErrorOfSuccess { container: &'static str },

    #[error("value requested from an empty {container}")]
    EmptyOptional { container: &'static str },

    #[error("{0}")]
    Custom(String),
}

impl Violation {
    /// Violation for reading the success payload of a failed outcome.
    #[must_use]
    pub fn value_of_failure<C: ?Sized>() -> Self {
        Self::ValueOfFailure {
            container: std::any::type_name::<C>(),
        }
    }

    /// Violation for reading the error payload of a successful outcome.
    #[must_use]
    pub fn error_of_success<C: ?Sized>() -> Self {
        Self::ErrorOfSuccess {
            container: std::any::type_name::<C>(),
        }
    }

    /// Violation for reading an empty optional.
    #[must_use]
    pub fn empty_optional<C: ?Sized>() -> Self {
        Self::EmptyOptional {
            container: std::any::type_name::<C>(),
        }
    }

    /// Free-form violation for callers using [`crate::contract::ensure`] directly.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

//! # Carrier Core
//!
//! Two value holders that keep ordinary failure and absence out of panics:
//!
//! - [`Outcome<T, E>`] holds exactly one of a success value or an error value.
//! - [`Optional<T>`] holds zero or one value.
//!
//! ## Two channels
//!
//! Expected failure travels as data: an [`Outcome`] in the failure state, or an
//! empty [`Optional`]. Callers branch on [`Outcome::is_success`] /
//! [`Optional::is_present`] and pass the holder up like any other value.
//!
//! Reading the wrong variant is a bug in the caller. It is never returned as an
//! error; it goes to [`contract::violated`], which logs and then panics or
//! aborts depending on the installed [`ViolationPolicy`].
//!
//! ## Thread safety
//!
//! Neither holder synchronizes anything. They are `Send`/`Sync` exactly when
//! their payloads are, and shared mutation needs external locking.

mod config;
pub mod contract;
mod error;
mod ext;
mod optional;
mod outcome;

pub use config::{ContractConfig, POLICY_ENV_VAR, ViolationPolicy};
pub use error::{CarrierResult, Error, Violation};
pub use ext::OutcomeExt;
pub use optional::Optional;
pub use outcome::Outcome;

//! Fatal precondition checks.
//!
//! A broken precondition is a bug in the caller, not an expected failure, so it
//! never shows up as a typed error. [`violated`] logs the breach with the
//! caller's source location and then panics or aborts according to the
//! process-wide [`ViolationPolicy`].
//!
//! Under the default [`ViolationPolicy::Panic`] a violation unwinds, which lets
//! tests observe it with `#[should_panic]`. Release builds that set
//! `panic = "abort"` turn it into an abort without further configuration.

use std::panic::Location;
use std::sync::OnceLock;

use crate::config::{ContractConfig, ViolationPolicy};
use crate::error::{CarrierResult, Error, Violation};

static POLICY: OnceLock<ViolationPolicy> = OnceLock::new();

/// Install the process-wide violation policy.
///
/// The policy can be set once. Installing the same policy again is accepted.
///
/// # Errors
///
/// Returns [`Error::PolicyAlreadyInstalled`] if a different policy is already in place.
pub fn install(config: ContractConfig) -> CarrierResult<()> {
    let requested = config.on_violation;
    let installed = *POLICY.get_or_init(|| requested);

    if installed == requested {
        tracing::debug!(policy = %installed, "contract violation policy installed");
        Ok(())
    } else {
        Err(Error::PolicyAlreadyInstalled { installed })
    }
}

/// The active policy, [`ViolationPolicy::Panic`] until one is installed.
#[inline]
#[must_use]
pub fn policy() -> ViolationPolicy {
    POLICY.get().copied().unwrap_or_default()
}

/// Report a contract violation. Never returns.
///
/// # Panics
///
/// Always, under [`ViolationPolicy::Panic`]. Aborts the process under
/// [`ViolationPolicy::Abort`].
#[cold]
#[track_caller]
#[allow(clippy::panic)]
pub fn violated(violation: Violation) -> ! {
    let location = Location::caller();
    let policy = policy();

    tracing::error!(
        %violation,
        file = location.file(),
        line = location.line(),
        %policy,
        "contract violation"
    );

    match policy {
        ViolationPolicy::Abort => std::process::abort(),
        ViolationPolicy::Panic => panic!("contract violation: {violation} at {location}"),
    }
}

/// No-op when `condition` holds, [`violated`] otherwise.
///
/// The violation is built lazily so the happy path does not allocate.
///
/// # Panics
///
/// When `condition` is false, see [`violated`].
#[inline]
#[track_caller]
pub fn ensure<F>(condition: bool, violation: F)
where
    F: FnOnce() -> Violation,
{
    if !condition {
        violated(violation());
    }
}

//! Integration tests for precondition violations.
//!
//! Reading the wrong variant of an `Outcome` or the value of an empty
//! `Optional` must never return. Under the default policy it panics with a
//! message naming the misused container.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use carrier::carrier_core::contract;
use carrier::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_test_writer()
        .try_init();
}

#[test]
#[should_panic(expected = "success value requested from a failed")]
fn test_value_ref_of_failure_does_not_return() {
    init_test_tracing();
    let outcome: Outcome<u64, String> = Outcome::failure("offline".to_string());
    let _ = outcome.value_ref();
}

#[test]
#[should_panic(expected = "error requested from a successful")]
fn test_error_ref_of_success_does_not_return() {
    init_test_tracing();
    let outcome: Outcome<u64, String> = Outcome::success(1);
    let _ = outcome.error_ref();
}

#[test]
#[should_panic(expected = "Outcome<u64")]
fn test_violation_message_names_payload_types() {
    init_test_tracing();
    let outcome: Outcome<u64, String> = Outcome::failure(String::new());
    let _ = outcome.value();
}

/// The panic points at the misuse site in this file, not inside carrier.
#[test]
#[should_panic(expected = "contract_violation_test.rs")]
fn test_violation_reports_calling_file() {
    init_test_tracing();
    let outcome: Outcome<u64, String> = Outcome::failure("offline".to_string());
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "contract_violation_test.rs")]
fn test_deref_violation_reports_calling_file() {
    init_test_tracing();
    let empty: Optional<String> = Optional::empty();
    let _ = empty.len();
}

#[test]
#[should_panic(expected = "value requested from an empty")]
fn test_get_of_copied_empty_optional_does_not_return() {
    init_test_tracing();
    let empty: Optional<String> = Optional::empty();
    let copy = empty.clone();
    let _ = Optional::get(&copy);
}

#[test]
#[should_panic(expected = "value requested from an empty")]
fn test_into_inner_of_empty_optional_does_not_return() {
    init_test_tracing();
    let _ = Optional::into_inner(Optional::<u8>::empty());
}

#[test]
#[should_panic(expected = "budget exhausted")]
fn test_ensure_reports_custom_violation() {
    init_test_tracing();
    let remaining = 0_u32;
    ensure(remaining > 0, || Violation::custom("budget exhausted"));
}

#[test]
fn test_default_policy_is_panic() {
    assert_eq!(contract::policy(), ViolationPolicy::Panic);
}

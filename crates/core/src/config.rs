//! Configuration for contract enforcement.
//!
//! The only tunable is what happens when calling code breaks a precondition:
//! unwind with a panic (the default, observable by tests) or abort the process.

use std::env::VarError;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CarrierResult, Error};

/// Environment variable read by [`ContractConfig::from_env`].
pub const POLICY_ENV_VAR: &str = "CARRIER_ON_VIOLATION";

/// Reaction to a contract violation.
///
/// Parsed the same way from TOML and from [`POLICY_ENV_VAR`]: case-insensitive,
/// surrounding whitespace ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ViolationPolicy {
    /// Log, then panic. Unwinds in the default profile, aborts under `panic = "abort"`.
    #[default]
    Panic,

    /// Log, then abort the process unconditionally.
    Abort,
}

impl fmt::Display for ViolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic => write!(f, "panic"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for ViolationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "abort" => Ok(Self::Abort),
            _ => Err(Error::invalid_policy(s)),
        }
    }
}

impl TryFrom<String> for ViolationPolicy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Contract enforcement settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// What to do when a precondition is broken.
    pub on_violation: ViolationPolicy,
}

/// Top-level document shape accepted by [`ContractConfig::from_toml_str`].
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    contract: ContractConfig,
}

impl ContractConfig {
    /// Create a config with the given policy.
    #[inline]
    #[must_use]
    pub const fn new(on_violation: ViolationPolicy) -> Self {
        Self { on_violation }
    }

    /// Parse the `[contract]` table of a TOML document.
    ///
    /// A document without the table yields the default config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] if the text is not valid TOML or the
    /// policy is not one of `panic` / `abort`.
    pub fn from_toml_str(text: &str) -> CarrierResult<Self> {
        let document: ConfigDocument = toml::from_str(text)?;
        Ok(document.contract)
    }

    /// Read the policy from [`POLICY_ENV_VAR`], defaulting when unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if the variable holds an unknown policy
    /// or is not valid unicode.
    pub fn from_env() -> CarrierResult<Self> {
        match std::env::var(POLICY_ENV_VAR) {
            Ok(value) => Self::from_env_value(Some(value.as_str())),
            Err(VarError::NotPresent) => Self::from_env_value(None),
            Err(VarError::NotUnicode(raw)) => {
                Err(Error::invalid_policy(raw.to_string_lossy().into_owned()))
            }
        }
    }

    fn from_env_value(value: Option<&str>) -> CarrierResult<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map_or(Ok(ViolationPolicy::default()), str::parse::<ViolationPolicy>)
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_default_policy_is_panic() {
        assert_eq!(ContractConfig::default().on_violation, ViolationPolicy::Panic);
    }

    #[test]
    fn test_policy_from_str_ignores_case_and_whitespace() {
        assert_eq!(" Abort ".parse::<ViolationPolicy>().unwrap(), ViolationPolicy::Abort);
        assert_eq!("PANIC".parse::<ViolationPolicy>().unwrap(), ViolationPolicy::Panic);
    }

    #[test]
    fn test_policy_from_str_rejects_unknown() {
        let err = "explode".parse::<ViolationPolicy>().unwrap_err();
        assert!(matches!(err, Error::InvalidPolicy { ref value } if value == "explode"));
    }

    #[test]
    fn test_from_toml_reads_contract_table() {
        let config = ContractConfig::from_toml_str("[contract]\non_violation = \"abort\"\n").unwrap();
        assert_eq!(config.on_violation, ViolationPolicy::Abort);
    }

    #[test]
    fn test_from_toml_without_table_is_default() {
        let config = ContractConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, ContractConfig::default());
    }

    #[test]
    fn test_from_toml_accepts_same_spellings_as_env() {
        for raw in ["Abort", " abort ", "ABORT"] {
            let text = format!("[contract]\non_violation = \"{raw}\"\n");
            let from_toml = ContractConfig::from_toml_str(&text).unwrap();
            let from_env = ContractConfig::from_env_value(Some(raw)).unwrap();
            assert_eq!(from_toml, from_env, "spelling {raw:?}");
            assert_eq!(from_toml.on_violation, ViolationPolicy::Abort);
        }
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        let err = ContractConfig::from_toml_str("[contract]\non_violation = \"ignore\"\n")
            .unwrap_err();
        assert_eq!(err.code(), "TOML_PARSE_FAILED");
        assert!(err.to_string().contains("ignore"), "got: {err}");
    }

    #[test]
    fn test_from_env_value_unset_or_blank_is_default() {
        assert_eq!(ContractConfig::from_env_value(None).unwrap(), ContractConfig::default());
        assert_eq!(
            ContractConfig::from_env_value(Some("  ")).unwrap(),
            ContractConfig::default()
        );
    }

    #[test]
    fn test_from_env_value_parses_policy() {
        let config = ContractConfig::from_env_value(Some("abort")).unwrap();
        assert_eq!(config.on_violation, ViolationPolicy::Abort);
    }

    #[test]
    fn test_from_env_value_rejects_unknown() {
        assert!(ContractConfig::from_env_value(Some("retry")).is_err());
    }

    #[test]
    fn test_config_json_round_trip_uses_lowercase_names() {
        let json = serde_json::to_string(&ContractConfig::new(ViolationPolicy::Abort)).unwrap();
        assert_eq!(json, r#"{"on_violation":"abort"}"#);
    }
}

//! Violation policies and resolution options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a class of violation is handled during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Record nothing.
    Ignore,
    /// Record a warning; resolution still succeeds.
    Warn,
    /// Record an error; resolution fails.
    Error,
}

impl Policy {
    /// Severity of diagnostics produced under this policy, if any.
    #[must_use]
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Ignore => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown policy `{0}` (expected ignore, warn or error)")]
pub struct ParsePolicyError(String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, but the resolved tree is usable.
    Warning,
    /// Resolution fails.
    Error,
}

/// Settings recognized by [`resolve`](crate::resolve).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Policy for references to unknown documents.
    pub on_broken_link: Policy,
    /// Policy for documents referenced from more than one slot.
    pub on_duplicate_id: Policy,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            on_broken_link: Policy::Error,
            on_duplicate_id: Policy::Warn,
        }
    }
}

impl ResolveOptions {
    /// Options applying the same policy to every violation class.
    #[must_use]
    pub fn uniform(policy: Policy) -> Self {
        Self {
            on_broken_link: policy,
            on_duplicate_id: policy,
        }
    }
}

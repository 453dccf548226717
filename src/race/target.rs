//! Race target identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::race::error::TargetError;

/// An opaque identifier for a remote resource that can be probed.
///
/// The resolver never looks inside a target; only the [`Probe`](crate::probe::Probe)
/// interprets it (the HTTP probe treats it as a URL). A target is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Target(String);

impl Target {
    /// Create a target, rejecting empty or whitespace-only identifiers.
    pub fn new(id: impl Into<String>) -> Result<Self, TargetError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TargetError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Target {
    type Error = TargetError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for Target {
    type Error = TargetError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.0
    }
}

//! State identifiers.
//!
//! States in a configured machine are named by plain strings. `StateName`
//! wraps the string so that state names and event names cannot be mixed up
//! at call sites.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a configured state.
///
/// Any string is a valid name, including the empty string. Presence in a
/// configuration is always checked by key, never by truthiness.
///
/// # Example
///
/// ```rust
/// use fsm_rewind::core::StateName;
///
/// let idle = StateName::new("idle");
/// assert_eq!(idle.as_str(), "idle");
/// assert_eq!(idle, "idle");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    /// Create a state name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StateName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&StateName> for StateName {
    fn from(s: &StateName) -> Self {
        s.clone()
    }
}

impl PartialEq<str> for StateName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

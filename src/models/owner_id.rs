use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for owner identifiers in the marq-link SDK.
///
/// The owner identifier is the stable id of the identity that created a
/// record; it is the authorization key for every operation on that record.
/// Wrapping it prevents confusion with other string identifiers (record ids,
/// subscription ids, tokens) at compile time.
///
/// An `OwnerId` may be empty: "no resolved identity" is a first-class state
/// for callers, checked via [`is_empty`](OwnerId::is_empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create a new OwnerId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the owner id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// `true` when the identifier is empty or whitespace-only, i.e. no
    /// resolved identity.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a committed change on the bookmark table.
///
/// The store's record table is create-or-delete only (no update policy
/// exists), so the change stream carries exactly these two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// A record was inserted
    Insert,
    /// A record was deleted
    Delete,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Insert => write!(f, "insert"),
            ChangeType::Delete => write!(f, "delete"),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::owner_id::OwnerId;

/// A stored bookmark record.
///
/// Records are immutable after creation: there is no update operation, only
/// add and remove. `id` and `created_at` are generated by the store;
/// `owner_id` is set at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Opaque unique identifier generated by the store on creation
    pub id: String,

    /// Identifier of the owning identity (immutable)
    pub owner_id: OwnerId,

    /// Bookmark title (non-empty, trimmed)
    pub title: String,

    /// Bookmark URL (non-empty, trimmed)
    pub url: String,

    /// Creation timestamp in unix epoch milliseconds (immutable)
    pub created_at: i64,
}

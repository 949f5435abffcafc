use serde::{Deserialize, Serialize};

/// Payload for creating a bookmark.
///
/// Title and url are trimmed by the record service before insertion; both
/// must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    /// Bookmark title
    pub title: String,

    /// Bookmark URL
    pub url: String,
}

impl NewBookmark {
    /// Create a new bookmark payload.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

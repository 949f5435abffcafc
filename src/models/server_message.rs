use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;
use super::change_type::ChangeType;

/// Server-to-client messages on the change-notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Authentication succeeded
    AuthSuccess {
        /// Authenticated user id
        user_id: String,
    },

    /// Authentication failed
    AuthError {
        /// Error message
        message: String,
    },

    /// The subscription was registered and the change stream is live
    SubscriptionAck {
        /// The subscription id that was registered
        subscription_id: String,
    },

    /// One committed insert or delete on the bookmark table
    Change {
        /// The subscription id this notification is for
        subscription_id: String,

        /// Kind of change: insert or delete
        change_type: ChangeType,

        /// Inserted records (present for inserts)
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<Vec<Bookmark>>,

        /// Deleted records (present for deletes)
        #[serde(skip_serializing_if = "Option::is_none")]
        old_rows: Option<Vec<Bookmark>>,
    },

    /// Subscription-scoped error
    Error {
        /// The subscription id this error is for
        subscription_id: String,

        /// Error code
        code: String,

        /// Error message
        message: String,
    },
}

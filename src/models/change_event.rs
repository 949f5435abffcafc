use super::bookmark::Bookmark;

/// Change event received through a subscription channel.
///
/// Note on echoes: the store delivers one event per committed change, with
/// no ordering guarantee relative to the completion of the mutating call
/// that caused it. A consumer that both mutates and subscribes may observe
/// its own change twice (once from the call's result, once here) and should
/// de-duplicate by record id or treat both as idempotent upserts.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// Acknowledgement of subscription registration
    Ack {
        /// Subscription id
        subscription_id: String,
    },

    /// Insert notification
    Insert {
        /// Subscription id the change belongs to
        subscription_id: String,
        /// Inserted records
        rows: Vec<Bookmark>,
    },

    /// Delete notification
    Delete {
        /// Subscription id the change belongs to
        subscription_id: String,
        /// Deleted records
        old_rows: Vec<Bookmark>,
    },

    /// Error notification from the server
    Error {
        /// Subscription id related to the error
        subscription_id: String,
        /// Error code
        code: String,
        /// Human-readable error message
        message: String,
    },
}

impl ChangeEvent {
    /// Returns true if this is an error event
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the subscription id for this event
    pub fn subscription_id(&self) -> &str {
        match self {
            Self::Ack { subscription_id }
            | Self::Insert {
                subscription_id, ..
            }
            | Self::Delete {
                subscription_id, ..
            }
            | Self::Error {
                subscription_id, ..
            } => subscription_id.as_str(),
        }
    }
}

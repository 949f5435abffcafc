use serde::{Deserialize, Serialize};

use super::subscription_request::SubscriptionRequest;
use super::ws_auth_credentials::WsAuthCredentials;

/// Client-to-server messages on the change-notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Authenticate the WebSocket connection.
    ///
    /// Sent immediately after the connection is established. The server
    /// responds with `auth_success` or `auth_error`.
    Authenticate {
        /// Authentication credentials
        #[serde(flatten)]
        credentials: WsAuthCredentials,
    },

    /// Open an owner-scoped change subscription
    Subscribe {
        /// Subscription to register
        subscription: SubscriptionRequest,
    },

    /// Close a change subscription
    Unsubscribe {
        /// The subscription id to release
        subscription_id: String,
    },
}

use serde::{Deserialize, Serialize};

/// Credentials carried in the WebSocket `authenticate` message.
///
/// The change-notification channel requires an explicit authentication
/// message after the connection is established, even when an Authorization
/// header was sent during the handshake. The store evaluates its ownership
/// policies against the identity proven here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum WsAuthCredentials {
    /// Signed session token issued by the external identity provider
    Bearer {
        /// The signed access token
        token: String,
    },
}

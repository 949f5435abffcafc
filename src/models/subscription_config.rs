use super::owner_id::OwnerId;

/// Configuration for opening a change subscription.
#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    /// Client-generated subscription identifier
    pub id: String,

    /// Owner identifier the channel is scoped to
    pub owner_id: OwnerId,

    /// Optional WebSocket URL override (defaults to the client's base URL
    /// with the scheme mapped to ws/wss and the changes path appended)
    pub ws_url: Option<String>,
}

impl SubscriptionConfig {
    /// Create a new subscription configuration.
    pub fn new(id: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id: id.into(),
            owner_id,
            ws_url: None,
        }
    }

    /// Override the WebSocket URL for this subscription.
    pub fn with_ws_url(mut self, ws_url: impl Into<String>) -> Self {
        self.ws_url = Some(ws_url.into());
        self
    }
}

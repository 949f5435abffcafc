use serde::{Deserialize, Serialize};

use super::owner_id::OwnerId;

/// Subscription registration sent to the server.
///
/// The `owner_id` becomes a server-side filter equivalent to
/// `owner_id = <given identifier>` over insert and delete events on the
/// bookmark table. The server enforces its own ownership policy on top:
/// subscribing to an owner other than the authenticated identity is
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// Client-generated subscription identifier
    pub id: String,

    /// Owner identifier the change stream is scoped to
    pub owner_id: OwnerId,
}

//! # marq-link
//!
//! Rust client SDK for Marq, an ownership-scoped bookmark store with
//! real-time change streams.
//!
//! The SDK covers three concerns:
//!
//! - **Records** ([`BookmarkService`]): add, list, and remove bookmarks over
//!   HTTP. Every call takes the owner id explicitly; the store's ownership
//!   policies enforce isolation server-side, and the SDK scopes every
//!   request so application code never issues an unscoped query.
//! - **Change subscriptions** ([`ChangeSubscription`], [`LiveBookmarks`]):
//!   a WebSocket channel delivering insert/delete events for one owner's
//!   bookmarks, with explicit close semantics and safe channel swapping on
//!   owner change.
//! - **Session** ([`SessionContext`]): the single holder of the current
//!   signed identity, fed by identity-provider events and observable through
//!   a watch channel. Wire it to the client as a dynamic credential source
//!   and token refresh propagates automatically.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marq_link::{AuthEvent, Identity, MarqLinkClient, NewBookmark, OwnerId, SessionContext};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Session state, fed by your identity provider's callbacks.
//! let session = SessionContext::new();
//! session.apply(AuthEvent::SignedIn(Identity::new(
//!     OwnerId::new("user_a"),
//!     "signed-token",
//! )));
//!
//! let client = MarqLinkClient::builder()
//!     .base_url("http://localhost:8080")
//!     .auth_provider(Arc::new(session.clone()))
//!     .build()?;
//!
//! // All record operations take the owner id explicitly.
//! let owner = session.owner_id().expect("signed in");
//! client
//!     .records()
//!     .add(&owner, NewBookmark::new("Docs", "https://example.com/docs"))
//!     .await?;
//!
//! for bookmark in client.records().list(&owner).await? {
//!     println!("{} {}", bookmark.title, bookmark.url);
//! }
//!
//! // Live changes, one channel per owner.
//! let live = client.live();
//! live.subscribe(&owner, |change| {
//!     println!("{:?}: {:?}", change.change_type, change.record_ids());
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod event_handlers;
pub mod live;
pub mod models;
pub mod records;
pub mod session;
pub mod subscription;
pub mod timeouts;

pub use auth::{ArcDynAuthProvider, AuthProvider, DynamicAuthProvider};
pub use client::{MarqLinkClient, MarqLinkClientBuilder};
pub use credentials::{MemorySessionStore, SessionStore, StoredSession};
pub use error::{MarqLinkError, Result};
pub use event_handlers::{ConnectionError, DisconnectReason, EventHandlers};
pub use live::LiveBookmarks;
pub use models::{
    Bookmark, ChangeEvent, ChangeType, HealthCheckResponse, NewBookmark, OwnerId, RecordChange,
    SubscriptionConfig,
};
pub use records::BookmarkService;
pub use session::{AuthEvent, Identity, SessionContext};
pub use subscription::ChangeSubscription;
pub use timeouts::{MarqLinkTimeouts, MarqLinkTimeoutsBuilder};

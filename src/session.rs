//! Process-wide session state.
//!
//! [`SessionContext`] is the single holder of the current signed identity.
//! It is initialized once at startup (optionally from a persisted session)
//! and mutated only in response to identity-provider events: sign-in,
//! sign-out, and token refresh. Each event replaces the held identity
//! atomically and notifies observers through a watch channel.
//!
//! "No identity" is a first-class state, not an error. Consumers read the
//! current owner id from this holder and suppress dependent operations
//! (list/add/remove/subscribe) while it is absent, never from a hidden
//! global.
//!
//! ```rust
//! use marq_link::{AuthEvent, Identity, OwnerId, SessionContext};
//!
//! let session = SessionContext::new();
//! assert!(session.owner_id().is_none());
//!
//! session.apply(AuthEvent::SignedIn(Identity::new(
//!     OwnerId::new("user_a"),
//!     "signed-token",
//! )));
//! assert_eq!(session.owner_id().unwrap().as_str(), "user_a");
//!
//! session.apply(AuthEvent::SignedOut);
//! assert!(session.owner_id().is_none());
//! ```

use crate::auth::{AuthProvider, DynamicAuthProvider};
use crate::credentials::SessionStore;
use crate::error::Result;
use crate::models::OwnerId;
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

/// The current signed identity: a stable user id plus the signed session
/// token proving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Stable identifier issued by the identity provider
    pub user_id: OwnerId,

    /// Signed session token
    pub access_token: String,

    /// Token expiry in unix epoch milliseconds, when known
    pub expires_at: Option<i64>,
}

impl Identity {
    /// Create an identity from a user id and signed token.
    pub fn new(user_id: OwnerId, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Set the token expiry.
    pub fn with_expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Identity-provider callback events consumed by the session context.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// A user signed in
    SignedIn(Identity),
    /// The provider rotated the session token for the signed-in user
    TokenRefreshed(Identity),
    /// The user signed out
    SignedOut,
}

struct SessionInner {
    state: watch::Sender<Option<Identity>>,
}

/// Process-wide holder of the current signed identity.
///
/// Cheap to clone; all clones share the same state. Implements
/// [`DynamicAuthProvider`], so a client built with
/// `auth_provider(session.clone())` resolves the session's current token on
/// every request and reconnect.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<SessionInner>,
}

impl SessionContext {
    /// Create a session context with no identity (signed-out state).
    pub fn new() -> Self {
        Self::with_identity(None)
    }

    /// Create a session context seeded with an identity.
    pub fn with_identity(identity: Option<Identity>) -> Self {
        let (state, _) = watch::channel(identity);
        Self {
            inner: Arc::new(SessionInner { state }),
        }
    }

    /// Initialize from a persisted session, when one exists for `instance`.
    ///
    /// Called once at application start; afterwards the context is mutated
    /// only by [`apply`](SessionContext::apply).
    pub fn restore(store: &dyn SessionStore, instance: &str) -> Result<Self> {
        let identity = store
            .get_session(instance)?
            .map(|session| session.into_identity());
        if let Some(identity) = &identity {
            debug!(
                "[SESSION] Restored persisted session for user_id={}",
                identity.user_id
            );
        }
        Ok(Self::with_identity(identity))
    }

    /// Apply an identity-provider event, replacing the held identity
    /// atomically and notifying observers.
    pub fn apply(&self, event: AuthEvent) {
        let next = match event {
            AuthEvent::SignedIn(identity) => {
                debug!("[SESSION] Signed in as user_id={}", identity.user_id);
                Some(identity)
            },
            AuthEvent::TokenRefreshed(identity) => {
                debug!("[SESSION] Token refreshed for user_id={}", identity.user_id);
                Some(identity)
            },
            AuthEvent::SignedOut => {
                debug!("[SESSION] Signed out");
                None
            },
        };
        self.inner.state.send_replace(next);
    }

    /// The current identity, or `None` when signed out.
    pub fn current(&self) -> Option<Identity> {
        self.inner.state.borrow().clone()
    }

    /// The current owner id, or `None` when signed out.
    ///
    /// This is the value callers pass explicitly to every record-service and
    /// subscription call.
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.inner
            .state
            .borrow()
            .as_ref()
            .map(|identity| identity.user_id.clone())
    }

    /// `true` when an identity is present.
    pub fn is_signed_in(&self) -> bool {
        self.inner.state.borrow().is_some()
    }

    /// Observe identity changes.
    ///
    /// The receiver yields the new identity (or `None`) after every applied
    /// event. Typical consumers re-list and re-subscribe on change.
    pub fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.inner.state.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

#[async_trait::async_trait]
impl DynamicAuthProvider for SessionContext {
    async fn get_auth(&self) -> Result<AuthProvider> {
        match self.current() {
            Some(identity) => Ok(AuthProvider::bearer(identity.access_token)),
            None => Ok(AuthProvider::None),
        }
    }
}

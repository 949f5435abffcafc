//! Persisted-session storage abstraction.
//!
//! The identity provider issues signed session tokens; applications usually
//! persist the last one so a restart does not force a fresh sign-in. This
//! module provides a trait-based store for that persisted session, with an
//! in-memory implementation for tests and short-lived processes.
//!
//! # Security Note
//!
//! Implementations MUST protect stored tokens: restrictive file permissions
//! (0600 on Unix), never logged, encrypted where the deployment calls for it.

use crate::error::Result;
use crate::models::OwnerId;
use crate::session::Identity;
use serde::{Deserialize, Serialize};

/// A persisted session for one store instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    /// Store instance identifier (e.g. "local", "production", a URL)
    pub instance: String,

    /// Stable identifier of the signed-in identity
    pub user_id: String,

    /// Signed session token issued by the identity provider
    pub access_token: String,

    /// Token expiry in unix epoch milliseconds, when known
    pub expires_at: Option<i64>,
}

impl StoredSession {
    /// Create a new stored session.
    pub fn new(
        instance: impl Into<String>,
        user_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            instance: instance.into(),
            user_id: user_id.into(),
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Set the token expiry.
    pub fn with_expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Convert into a live [`Identity`] for the session context.
    pub fn into_identity(self) -> Identity {
        Identity {
            user_id: OwnerId::new(self.user_id),
            access_token: self.access_token,
            expires_at: self.expires_at,
        }
    }
}

/// Trait for persisted-session storage backends.
///
/// Implementations can keep sessions in files, environment variables, secure
/// keychains, or any other storage mechanism.
pub trait SessionStore {
    /// Retrieve the persisted session for a store instance.
    ///
    /// Returns `Ok(None)` when nothing is stored for the instance.
    fn get_session(&self, instance: &str) -> Result<Option<StoredSession>>;

    /// Persist a session, overwriting any existing one for the same instance.
    fn set_session(&mut self, session: &StoredSession) -> Result<()>;

    /// Delete the persisted session for an instance.
    ///
    /// Returns `Ok(())` even when nothing was stored.
    fn delete_session(&mut self, instance: &str) -> Result<()>;

    /// List all instance identifiers with a persisted session.
    fn list_instances(&self) -> Result<Vec<String>>;

    /// Check whether a session exists for an instance.
    fn has_session(&self, instance: &str) -> Result<bool> {
        Ok(self.get_session(instance)?.is_some())
    }
}

/// In-memory session store for testing and temporary use.
///
/// Does NOT persist across restarts.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    sessions: std::collections::HashMap<String, StoredSession>,
}

impl MemorySessionStore {
    /// Create a new empty in-memory session store.
    pub fn new() -> Self {
        Self {
            sessions: std::collections::HashMap::new(),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self, instance: &str) -> Result<Option<StoredSession>> {
        Ok(self.sessions.get(instance).cloned())
    }

    fn set_session(&mut self, session: &StoredSession) -> Result<()> {
        self.sessions
            .insert(session.instance.clone(), session.clone());
        Ok(())
    }

    fn delete_session(&mut self, instance: &str) -> Result<()> {
        self.sessions.remove(instance);
        Ok(())
    }

    fn list_instances(&self) -> Result<Vec<String>> {
        Ok(self.sessions.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_operations() {
        let mut store = MemorySessionStore::new();

        assert_eq!(store.get_session("local").unwrap(), None);
        assert!(!store.has_session("local").unwrap());

        let session = StoredSession::new("local", "user_a", "tok_1");
        store.set_session(&session).unwrap();

        assert_eq!(store.get_session("local").unwrap(), Some(session));
        assert!(store.has_session("local").unwrap());

        store.delete_session("local").unwrap();
        assert_eq!(store.get_session("local").unwrap(), None);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemorySessionStore::new();

        store
            .set_session(&StoredSession::new("local", "user_a", "old_tok"))
            .unwrap();
        store
            .set_session(&StoredSession::new("local", "user_a", "new_tok"))
            .unwrap();

        let stored = store.get_session("local").unwrap().unwrap();
        assert_eq!(stored.access_token, "new_tok");
    }

    #[test]
    fn test_into_identity() {
        let session = StoredSession::new("local", "user_a", "tok_1").with_expires_at(1_700_000);
        let identity = session.into_identity();
        assert_eq!(identity.user_id.as_str(), "user_a");
        assert_eq!(identity.access_token, "tok_1");
        assert_eq!(identity.expires_at, Some(1_700_000));
    }
}

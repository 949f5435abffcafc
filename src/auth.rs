//! Authentication plumbing for the marq-link client.
//!
//! The SDK never runs an authentication protocol itself; sign-in happens
//! against an external identity provider, which issues a signed session
//! token. This module only carries that token to the store.
//!
//! ## Dynamic auth
//!
//! Use [`DynamicAuthProvider`] to supply credentials lazily, resolved on
//! every request or (re)connect. [`SessionContext`](crate::SessionContext)
//! implements it, so a client wired to a session automatically picks up
//! sign-in, sign-out, and token-refresh events.
//!
//! ```rust,no_run
//! use marq_link::{AuthProvider, DynamicAuthProvider};
//! use std::sync::Arc;
//!
//! struct MyTokenStore { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl DynamicAuthProvider for MyTokenStore {
//!     async fn get_auth(&self) -> marq_link::Result<AuthProvider> {
//!         // fetch / refresh token here
//!         Ok(AuthProvider::bearer("fresh-token"))
//!     }
//! }
//! ```

use crate::error::Result;
use std::sync::Arc;

/// Credentials attached to store requests.
///
/// # Examples
///
/// ```rust
/// use marq_link::AuthProvider;
///
/// // Signed session token from the identity provider
/// let auth = AuthProvider::bearer("eyJhbGc...");
///
/// // No identity (signed-out state)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// Signed session token (`Authorization: Bearer <token>`)
    Bearer(String),

    /// No credentials (signed-out state)
    None,
}

impl AuthProvider {
    /// Create bearer-token authentication from a signed session token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// No authentication.
    pub fn none() -> Self {
        Self::None
    }

    /// Attach the Authorization header to an HTTP request builder.
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Bearer(token) => request.bearer_auth(token),
            Self::None => request,
        }
    }

    /// Check if credentials are present.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ── Dynamic (async) auth provider ────────────────────────────────────────────

/// Async credential source resolved on every request or connect.
///
/// Implement this to supply tokens from any source: a session context,
/// secure storage, a refresh-token rotation, etc.
#[async_trait::async_trait]
pub trait DynamicAuthProvider: Send + Sync + 'static {
    /// Return the current (or freshly refreshed) credentials.
    async fn get_auth(&self) -> Result<AuthProvider>;
}

/// A boxed, reference-counted [`DynamicAuthProvider`].
pub type ArcDynAuthProvider = Arc<dyn DynamicAuthProvider>;

/// Resolves the effective [`AuthProvider`] for a call.
///
/// Holds either static credentials or a dynamic source. Call
/// [`resolve`](ResolvedAuth::resolve) before each request or connect to
/// obtain fresh credentials.
#[derive(Clone)]
pub enum ResolvedAuth {
    /// Static credentials set at construction time.
    Static(AuthProvider),
    /// Dynamic source consulted on every call.
    Dynamic(ArcDynAuthProvider),
}

impl ResolvedAuth {
    /// Obtain effective credentials, calling the dynamic source if present.
    pub async fn resolve(&self) -> Result<AuthProvider> {
        match self {
            Self::Static(p) => Ok(p.clone()),
            Self::Dynamic(provider) => provider.get_auth().await,
        }
    }

    /// `true` when no credentials of either kind are configured.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Static(AuthProvider::None))
    }
}

impl std::fmt::Debug for ResolvedAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(p) => write!(f, "ResolvedAuth::Static({:?})", p),
            Self::Dynamic(_) => write!(f, "ResolvedAuth::Dynamic(<fn>)"),
        }
    }
}

impl Default for ResolvedAuth {
    fn default() -> Self {
        Self::Static(AuthProvider::None)
    }
}

impl From<AuthProvider> for ResolvedAuth {
    fn from(p: AuthProvider) -> Self {
        Self::Static(p)
    }
}

impl From<ArcDynAuthProvider> for ResolvedAuth {
    fn from(p: ArcDynAuthProvider) -> Self {
        Self::Dynamic(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_creation() {
        let bearer = AuthProvider::bearer("test_token");
        assert!(bearer.is_authenticated());

        let none = AuthProvider::none();
        assert!(!none.is_authenticated());
    }

    #[tokio::test]
    async fn test_static_resolution() {
        let auth: ResolvedAuth = AuthProvider::bearer("tok").into();
        let resolved = auth.resolve().await.unwrap();
        assert!(matches!(resolved, AuthProvider::Bearer(t) if t == "tok"));
    }

    #[tokio::test]
    async fn test_dynamic_resolution() {
        struct Fixed;

        #[async_trait::async_trait]
        impl DynamicAuthProvider for Fixed {
            async fn get_auth(&self) -> Result<AuthProvider> {
                Ok(AuthProvider::bearer("dyn_tok"))
            }
        }

        let auth: ResolvedAuth = (Arc::new(Fixed) as ArcDynAuthProvider).into();
        assert!(!auth.is_none());
        let resolved = auth.resolve().await.unwrap();
        assert!(matches!(resolved, AuthProvider::Bearer(t) if t == "dyn_tok"));
    }
}

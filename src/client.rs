//! High-level client for the Marq bookmark store.
//!
//! [`MarqLinkClient`] is the entry point: build it once, share it freely
//! (cloning is cheap, the HTTP connection pool is shared), and reach the
//! record service, change subscriptions, and health checks through it.

use crate::{
    auth::{ArcDynAuthProvider, AuthProvider, ResolvedAuth},
    error::{MarqLinkError, Result},
    event_handlers::EventHandlers,
    live::LiveBookmarks,
    models::{HealthCheckResponse, OwnerId, SubscriptionConfig},
    records::BookmarkService,
    subscription::{generate_subscription_id, ChangeSubscription},
    timeouts::MarqLinkTimeouts,
};
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// How long a successful health check result is served from cache.
const HEALTH_CHECK_TTL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
struct CachedHealth {
    checked_at: Instant,
    response: HealthCheckResponse,
}

/// Client for the Marq bookmark store.
///
/// # Examples
///
/// ```rust,no_run
/// use marq_link::{MarqLinkClient, NewBookmark, OwnerId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MarqLinkClient::builder()
///     .base_url("http://localhost:8080")
///     .bearer_token("signed-token")
///     .build()?;
///
/// let owner = OwnerId::new("user_a");
/// let created = client
///     .records()
///     .add(&owner, NewBookmark::new("Docs", "https://example.com/docs"))
///     .await?;
/// println!("created {}", created.id);
///
/// let bookmarks = client.records().list(&owner).await?;
/// println!("{} bookmark(s)", bookmarks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MarqLinkClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: ResolvedAuth,
    records: BookmarkService,
    health_cache: Arc<Mutex<Option<CachedHealth>>>,
    timeouts: MarqLinkTimeouts,
    event_handlers: EventHandlers,
}

impl MarqLinkClient {
    /// Create a new client builder.
    pub fn builder() -> MarqLinkClientBuilder {
        MarqLinkClientBuilder::new()
    }

    /// The store base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The record service: bookmark add/list/remove.
    pub fn records(&self) -> &BookmarkService {
        &self.records
    }

    /// Open a change subscription scoped to `owner_id`.
    ///
    /// Returns a pull-style handle; call
    /// [`next()`](ChangeSubscription::next) to receive events and
    /// [`close()`](ChangeSubscription::close) when done with the channel.
    pub async fn subscribe(&self, owner_id: &OwnerId) -> Result<ChangeSubscription> {
        let config = SubscriptionConfig::new(generate_subscription_id(), owner_id.clone());
        self.subscribe_with_config(config).await
    }

    /// Open a change subscription with explicit configuration (custom
    /// subscription id or WebSocket URL override).
    pub async fn subscribe_with_config(
        &self,
        config: SubscriptionConfig,
    ) -> Result<ChangeSubscription> {
        let auth = self.auth.resolve().await?;
        ChangeSubscription::connect(
            &self.base_url,
            config,
            &auth,
            &self.timeouts,
            &self.event_handlers,
        )
        .await
    }

    /// Create a callback-style live view that holds at most one open change
    /// channel and swaps it safely on owner change.
    pub fn live(&self) -> LiveBookmarks {
        LiveBookmarks::new(
            self.base_url.clone(),
            self.auth.clone(),
            self.timeouts.clone(),
            self.event_handlers.clone(),
        )
    }

    /// Check whether the store is reachable and healthy.
    ///
    /// Successful results are cached for a short interval so call sites can
    /// gate operations on health without hammering the endpoint.
    pub async fn health_check(&self) -> Result<HealthCheckResponse> {
        let mut cache = self.health_cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if cached.checked_at.elapsed() < HEALTH_CHECK_TTL {
                return Ok(cached.response.clone());
            }
        }

        let endpoint = format!("{}/v1/api/healthcheck", self.base_url);
        debug!("[LINK_HTTP] GET {}", endpoint);

        let response = self.http_client.get(&endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarqLinkError::StoreError {
                status_code: status.as_u16(),
                message: "Health check failed".to_string(),
            });
        }

        let health: HealthCheckResponse = response.json().await?;
        *cache = Some(CachedHealth {
            checked_at: Instant::now(),
            response: health.clone(),
        });
        Ok(health)
    }
}

impl std::fmt::Debug for MarqLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarqLinkClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .finish()
    }
}

/// Builder for [`MarqLinkClient`].
pub struct MarqLinkClientBuilder {
    base_url: Option<String>,
    auth: ResolvedAuth,
    timeouts: MarqLinkTimeouts,
    event_handlers: EventHandlers,
}

impl Default for MarqLinkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarqLinkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            auth: ResolvedAuth::default(),
            timeouts: MarqLinkTimeouts::default(),
            event_handlers: EventHandlers::default(),
        }
    }

    /// Set the store base URL (required), e.g. `http://localhost:8080`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Authenticate with a signed session token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::bearer(token).into();
        self
    }

    /// Set static credentials explicitly.
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth.into();
        self
    }

    /// Use a dynamic credential source, resolved on every request and
    /// (re)connect. [`SessionContext`](crate::SessionContext) is the usual
    /// choice: the client then follows sign-in, sign-out, and token-refresh
    /// events automatically.
    pub fn auth_provider(mut self, provider: ArcDynAuthProvider) -> Self {
        self.auth = provider.into();
        self
    }

    /// Shorthand for setting the HTTP receive timeout only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Set the full timeout configuration.
    pub fn timeouts(mut self, timeouts: MarqLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Register connection lifecycle handlers for the change channel.
    pub fn event_handlers(mut self, handlers: EventHandlers) -> Self {
        self.event_handlers = handlers;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// [`ConfigurationError`](MarqLinkError::ConfigurationError) when the
    /// base URL is missing or malformed.
    pub fn build(self) -> Result<MarqLinkClient> {
        let base_url = self.base_url.ok_or_else(|| {
            MarqLinkError::ConfigurationError("base_url is required".to_string())
        })?;

        url::Url::parse(&base_url).map_err(|e| {
            MarqLinkError::ConfigurationError(format!("Invalid base_url '{}': {}", base_url, e))
        })?;

        let mut http_builder = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90));

        if !MarqLinkTimeouts::is_no_timeout(self.timeouts.connection_timeout) {
            http_builder = http_builder.connect_timeout(self.timeouts.connection_timeout);
        }
        if !MarqLinkTimeouts::is_no_timeout(self.timeouts.receive_timeout) {
            http_builder = http_builder.timeout(self.timeouts.receive_timeout);
        }

        let http_client = http_builder.build().map_err(|e| {
            MarqLinkError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        let records =
            BookmarkService::new(base_url.clone(), http_client.clone(), self.auth.clone());

        Ok(MarqLinkClient {
            base_url,
            http_client,
            auth: self.auth,
            records,
            health_cache: Arc::new(Mutex::new(None)),
            timeouts: self.timeouts,
            event_handlers: self.event_handlers,
        })
    }
}

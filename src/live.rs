//! Callback-style live bookmark changes with single-channel discipline.
//!
//! [`LiveBookmarks`] wraps [`ChangeSubscription`] for the common application
//! shape: hold at most one open channel, scoped to the current owner, and
//! deliver each insert/delete to a registered handler. Switching owners (or
//! re-subscribing for any reason) tears the previous channel down to
//! completion before the new one is opened, so stale events can never arrive
//! after the switch.

use crate::{
    auth::ResolvedAuth,
    error::{MarqLinkError, Result},
    event_handlers::EventHandlers,
    models::{OwnerId, RecordChange, SubscriptionConfig},
    subscription::{generate_subscription_id, ChangeSubscription},
    timeouts::MarqLinkTimeouts,
};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

/// Handler invoked for each insert or delete on the subscribed owner's
/// bookmarks.
pub type ChangeHandler = Arc<dyn Fn(RecordChange) + Send + Sync>;

struct ActiveChannel {
    owner_id: OwnerId,
    subscription_id: String,
    /// Signals the pump task to close its subscription and exit.
    shutdown: oneshot::Sender<()>,
    /// Pump task handle, awaited on teardown so shutdown is complete before
    /// a replacement channel opens.
    pump: JoinHandle<()>,
}

/// At-most-one live change channel, keyed by owner.
///
/// Obtained from [`MarqLinkClient::live`](crate::MarqLinkClient::live).
///
/// # Example
///
/// ```rust,no_run
/// use marq_link::{MarqLinkClient, OwnerId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MarqLinkClient::builder()
///     .base_url("http://localhost:8080")
///     .bearer_token("signed-token")
///     .build()?;
///
/// let live = client.live();
/// live.subscribe(&OwnerId::new("user_a"), |change| {
///     println!("{} record(s) changed", change.rows.len());
/// })
/// .await?;
///
/// // Later, e.g. on sign-out or owner switch:
/// live.unsubscribe().await;
/// # Ok(())
/// # }
/// ```
pub struct LiveBookmarks {
    base_url: String,
    auth: ResolvedAuth,
    timeouts: MarqLinkTimeouts,
    event_handlers: EventHandlers,
    active: Mutex<Option<ActiveChannel>>,
}

impl LiveBookmarks {
    pub(crate) fn new(
        base_url: String,
        auth: ResolvedAuth,
        timeouts: MarqLinkTimeouts,
        event_handlers: EventHandlers,
    ) -> Self {
        Self {
            base_url,
            auth,
            timeouts,
            event_handlers,
            active: Mutex::new(None),
        }
    }

    /// Open a change channel for `owner_id`, delivering each change to
    /// `handler`.
    ///
    /// Any previously active channel is closed to completion first; the old
    /// channel is gone before the new one connects, even when the connection
    /// attempt then fails.
    ///
    /// # Errors
    /// - [`ValidationError`](MarqLinkError::ValidationError) when `owner_id`
    ///   is empty. A consumer with no resolved identity has nothing to
    ///   subscribe to.
    pub async fn subscribe(
        &self,
        owner_id: &OwnerId,
        handler: impl Fn(RecordChange) + Send + Sync + 'static,
    ) -> Result<()> {
        if owner_id.is_empty() {
            return Err(MarqLinkError::ValidationError(
                "subscribe requires a resolved owner id".to_string(),
            ));
        }

        let mut active = self.active.lock().await;

        if let Some(previous) = active.take() {
            debug!(
                "[LIVE] Replacing channel for owner_id={} (subscription_id={})",
                previous.owner_id, previous.subscription_id
            );
            teardown(previous).await;
        }

        let auth = self.auth.resolve().await?;
        let config = SubscriptionConfig::new(generate_subscription_id(), owner_id.clone());
        let subscription_id = config.id.clone();

        let subscription = ChangeSubscription::connect(
            &self.base_url,
            config,
            &auth,
            &self.timeouts,
            &self.event_handlers,
        )
        .await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handler: ChangeHandler = Arc::new(handler);
        let pump = tokio::spawn(pump_events(subscription, shutdown_rx, handler));

        debug!(
            "[LIVE] Channel open for owner_id={} subscription_id={}",
            owner_id, subscription_id
        );
        *active = Some(ActiveChannel {
            owner_id: owner_id.clone(),
            subscription_id,
            shutdown: shutdown_tx,
            pump,
        });

        Ok(())
    }

    /// Close the active channel, if any.
    ///
    /// Waits for the channel's teardown to complete. No-op when nothing is
    /// subscribed.
    pub async fn unsubscribe(&self) {
        let previous = self.active.lock().await.take();
        if let Some(channel) = previous {
            debug!(
                "[LIVE] Closing channel for owner_id={} subscription_id={}",
                channel.owner_id, channel.subscription_id
            );
            teardown(channel).await;
        }
    }

    /// The owner the active channel is scoped to, or `None`.
    pub async fn active_owner(&self) -> Option<OwnerId> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|channel| channel.owner_id.clone())
    }

    /// `true` when a channel is currently open.
    pub async fn is_subscribed(&self) -> bool {
        self.active.lock().await.is_some()
    }
}

async fn teardown(channel: ActiveChannel) {
    let _ = channel.shutdown.send(());
    if let Err(e) = channel.pump.await {
        warn!("[LIVE] Pump task for {} ended abnormally: {}", channel.subscription_id, e);
    }
}

/// Drain subscription events into the handler until shutdown or stream end.
async fn pump_events(
    mut subscription: ChangeSubscription,
    mut shutdown: oneshot::Receiver<()>,
    handler: ChangeHandler,
) {
    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                let _ = subscription.close().await;
                return;
            }

            event = subscription.next() => {
                match event {
                    Some(Ok(event)) => {
                        if let Some(change) = RecordChange::from_event(event) {
                            handler(change);
                        }
                    },
                    Some(Err(e)) => {
                        warn!(
                            "[LIVE] Channel error on subscription {}: {}",
                            subscription.subscription_id(),
                            e
                        );
                    },
                    None => {
                        debug!(
                            "[LIVE] Channel for subscription {} ended",
                            subscription.subscription_id()
                        );
                        return;
                    },
                }
            }
        }
    }
}

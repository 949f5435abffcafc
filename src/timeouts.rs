//! Timeout configuration for marq-link client operations.
//!
//! Centralizes the timeouts for HTTP requests and the WebSocket
//! change-notification channel.

use std::time::Duration;

/// Timeout configuration for marq-link client operations.
///
/// # Examples
///
/// ```rust
/// use marq_link::MarqLinkTimeouts;
/// use std::time::Duration;
///
/// // Defaults (recommended for most cases)
/// let timeouts = MarqLinkTimeouts::default();
///
/// // Custom timeouts for high-latency environments
/// let timeouts = MarqLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(60))
///     .receive_timeout(Duration::from_secs(120))
///     .build();
///
/// // Aggressive timeouts for local development
/// let timeouts = MarqLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone)]
pub struct MarqLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Timeout for receiving data after a request is sent.
    /// Default: 30 seconds
    pub receive_timeout: Duration,

    /// Timeout for sending data to the server.
    /// Default: 10 seconds
    pub send_timeout: Duration,

    /// Timeout for the WebSocket authentication handshake.
    /// Default: 5 seconds
    pub auth_timeout: Duration,

    /// Timeout for waiting for the subscription acknowledgement.
    /// Default: 5 seconds
    pub subscribe_timeout: Duration,

    /// Keep-alive ping interval for WebSocket connections.
    /// Set to 0 to disable keep-alive pings.
    /// Default: 10 seconds
    pub keepalive_interval: Duration,
}

impl Default for MarqLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            receive_timeout: Duration::from_secs(30),
            send_timeout: Duration::from_secs(10),
            auth_timeout: Duration::from_secs(5),
            subscribe_timeout: Duration::from_secs(5),
            keepalive_interval: Duration::from_secs(10),
        }
    }
}

impl MarqLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> MarqLinkTimeoutsBuilder {
        MarqLinkTimeoutsBuilder::new()
    }

    /// Timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            receive_timeout: Duration::from_secs(5),
            send_timeout: Duration::from_secs(2),
            auth_timeout: Duration::from_secs(2),
            subscribe_timeout: Duration::from_secs(2),
            keepalive_interval: Duration::from_secs(15),
        }
    }

    /// Timeouts optimized for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            receive_timeout: Duration::from_secs(120),
            send_timeout: Duration::from_secs(30),
            auth_timeout: Duration::from_secs(15),
            subscribe_timeout: Duration::from_secs(15),
            keepalive_interval: Duration::from_secs(30),
        }
    }

    /// Check if a duration represents "no timeout" (zero or very large).
    pub fn is_no_timeout(duration: Duration) -> bool {
        duration.is_zero() || duration > Duration::from_secs(86400 * 365)
    }
}

/// Builder for custom [`MarqLinkTimeouts`] configurations.
#[derive(Debug, Clone)]
pub struct MarqLinkTimeoutsBuilder {
    timeouts: MarqLinkTimeouts,
}

impl MarqLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: MarqLinkTimeouts::default(),
        }
    }

    /// Set the connection timeout (TCP + TLS handshake).
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the receive timeout (waiting for data after request).
    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Set the send timeout (writing data to socket).
    pub fn send_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.send_timeout = timeout;
        self
    }

    /// Set the WebSocket authentication handshake timeout.
    pub fn auth_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.auth_timeout = timeout;
        self
    }

    /// Set the subscription acknowledgement timeout.
    pub fn subscribe_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.subscribe_timeout = timeout;
        self
    }

    /// Set the keepalive ping interval. Set to 0 to disable.
    pub fn keepalive_interval(mut self, interval: Duration) -> Self {
        self.timeouts.keepalive_interval = interval;
        self
    }

    /// Build the timeout configuration.
    pub fn build(self) -> MarqLinkTimeouts {
        self.timeouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = MarqLinkTimeouts::default();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(10));
        assert_eq!(timeouts.receive_timeout, Duration::from_secs(30));
        assert_eq!(timeouts.subscribe_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let timeouts = MarqLinkTimeouts::builder()
            .connection_timeout(Duration::from_secs(60))
            .receive_timeout(Duration::from_secs(120))
            .build();

        assert_eq!(timeouts.connection_timeout, Duration::from_secs(60));
        assert_eq!(timeouts.receive_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_presets() {
        assert!(MarqLinkTimeouts::fast().connection_timeout <= Duration::from_secs(5));
        assert!(MarqLinkTimeouts::relaxed().receive_timeout >= Duration::from_secs(60));
    }

    #[test]
    fn test_is_no_timeout() {
        assert!(MarqLinkTimeouts::is_no_timeout(Duration::ZERO));
        assert!(!MarqLinkTimeouts::is_no_timeout(Duration::from_secs(1)));
    }
}

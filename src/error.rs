//! Error types for the marq-link client library.

use thiserror::Error;

/// Result type used throughout marq-link.
pub type Result<T> = std::result::Result<T, MarqLinkError>;

/// Errors surfaced by marq-link operations.
///
/// Two categories matter to callers:
///
/// - [`ValidationError`](MarqLinkError::ValidationError): detected locally
///   before any request is sent; the store is never contacted and no state
///   changes.
/// - Everything else: a transport failure or a rejection by the store
///   (including its ownership-policy engine). The SDK does not distinguish
///   policy rejections from other store failures; both carry the store's
///   message and are terminal for that call. There is no retry: a failed
///   operation must be explicitly re-invoked by the caller.
#[derive(Debug, Error)]
pub enum MarqLinkError {
    /// Input rejected locally (empty title/url after trimming, missing owner id).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Transport-level failure reaching the store.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The store rejected the operation (policy or server-side failure).
    #[error("Store error ({status_code}): {message}")]
    StoreError {
        /// HTTP status returned by the store
        status_code: u16,
        /// Message extracted from the store's error payload
        message: String,
    },

    /// Missing or rejected credentials.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Invalid client configuration (bad base URL, malformed token, ...).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An operation did not complete within its configured timeout.
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Failed to encode or decode a wire payload.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// WebSocket transport failure on the change-notification channel.
    #[error("WebSocket error: {0}")]
    WebSocketError(String),

    /// Unexpected internal state.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for MarqLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MarqLinkError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            MarqLinkError::SerializationError(err.to_string())
        } else {
            MarqLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MarqLinkError {
    fn from(err: serde_json::Error) -> Self {
        MarqLinkError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarqLinkError::ValidationError("title is empty".into());
        assert_eq!(err.to_string(), "Validation error: title is empty");

        let err = MarqLinkError::StoreError {
            status_code: 403,
            message: "row violates ownership policy".into(),
        };
        assert_eq!(
            err.to_string(),
            "Store error (403): row violates ownership policy"
        );
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: MarqLinkError = parse_err.into();
        assert!(matches!(err, MarqLinkError::SerializationError(_)));
    }
}

//! Data models for the marq-link client library.
//!
//! Defines the bookmark record, request/response structures for the record
//! service, and the WebSocket message types used by change subscriptions.

pub mod bookmark;
pub mod change_event;
pub mod change_type;
pub mod client_message;
pub mod error_detail;
pub mod health_check_response;
pub mod new_bookmark;
pub mod owner_id;
pub mod record_change;
pub mod server_message;
pub mod subscription_config;
pub mod subscription_request;
pub mod ws_auth_credentials;


pub use bookmark::Bookmark;
pub use change_event::ChangeEvent;
pub use change_type::ChangeType;
pub use client_message::ClientMessage;
pub use error_detail::ErrorDetail;
pub use health_check_response::HealthCheckResponse;
pub use new_bookmark::NewBookmark;
pub use owner_id::OwnerId;
pub use record_change::RecordChange;
pub use server_message::ServerMessage;
pub use subscription_config::SubscriptionConfig;
pub use subscription_request::SubscriptionRequest;
pub use ws_auth_credentials::WsAuthCredentials;

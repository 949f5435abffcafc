use serde::{Deserialize, Serialize};

/// Response from the store's health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Server status string (e.g. "ok")
    pub status: String,

    /// Server version, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

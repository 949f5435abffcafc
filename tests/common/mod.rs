//! Shared helpers for integration tests.
//!
//! These tests run against a live Marq store. Configure the target with:
//!
//! - `MARQ_SERVER_URL` — base URL (default `http://localhost:8080`)
//! - `MARQ_TEST_OWNER_A` / `MARQ_TEST_TOKEN_A` — first test identity
//! - `MARQ_TEST_OWNER_B` / `MARQ_TEST_TOKEN_B` — second test identity
//!
//! Each test checks server reachability first and skips (passing) when the
//! server is not running, so `cargo test` stays green without one.

#![allow(dead_code)]

use marq_link::{MarqLinkClient, MarqLinkTimeouts, OwnerId};
use std::time::Duration;

pub fn server_url() -> String {
    std::env::var("MARQ_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Check whether the store answers its health check.
pub async fn is_server_running() -> bool {
    let url = format!("{}/v1/api/healthcheck", server_url());
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };
    matches!(client.get(&url).send().await, Ok(resp) if resp.status().is_success())
}

/// A test identity: an owner id plus the signed token that proves it.
#[derive(Debug, Clone)]
pub struct TestOwner {
    pub owner_id: OwnerId,
    pub token: String,
}

fn owner_from_env(owner_var: &str, token_var: &str) -> Option<TestOwner> {
    let owner = std::env::var(owner_var).ok()?;
    let token = std::env::var(token_var).ok()?;
    Some(TestOwner {
        owner_id: OwnerId::new(owner),
        token,
    })
}

/// First configured test identity, if any.
pub fn test_owner_a() -> Option<TestOwner> {
    owner_from_env("MARQ_TEST_OWNER_A", "MARQ_TEST_TOKEN_A")
}

/// Second configured test identity, if any.
pub fn test_owner_b() -> Option<TestOwner> {
    owner_from_env("MARQ_TEST_OWNER_B", "MARQ_TEST_TOKEN_B")
}

/// Build a client authenticated as the given test identity.
pub fn client_for(owner: &TestOwner) -> MarqLinkClient {
    MarqLinkClient::builder()
        .base_url(server_url())
        .bearer_token(owner.token.clone())
        .timeouts(MarqLinkTimeouts::fast())
        .build()
        .expect("test client should build")
}

/// Unique identifier for test data, so reruns against a shared server never
/// collide.
pub fn unique_ident(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{}_{}", prefix, nanos)
}

//! Ownership-scoped record service: bookmark CRUD over HTTP.
//!
//! Every operation takes the caller's owner id as an explicit, non-optional
//! argument; ownership is never inferred from ambient state. The explicit
//! `owner_id` filter on every request mirrors the store's own row-ownership
//! policies; the store's policy engine remains the single source of truth
//! for authorization, and this layer's filter keeps accidental unscoped
//! queries out of application code.
//!
//! Failures are terminal for the call: there is no retry or backoff here. A
//! caller that wants to retry issues a new call.

use crate::{
    auth::ResolvedAuth,
    error::{MarqLinkError, Result},
    models::{Bookmark, ErrorDetail, NewBookmark, OwnerId},
};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct AddBookmarkRequest<'a> {
    owner_id: &'a OwnerId,
    title: &'a str,
    url: &'a str,
}

/// Bookmark CRUD against the policy-enforcing store.
///
/// Obtained from [`MarqLinkClient::records`](crate::MarqLinkClient::records).
#[derive(Clone)]
pub struct BookmarkService {
    base_url: String,
    http_client: reqwest::Client,
    auth: ResolvedAuth,
}

impl BookmarkService {
    pub(crate) fn new(base_url: String, http_client: reqwest::Client, auth: ResolvedAuth) -> Self {
        Self {
            base_url,
            http_client,
            auth,
        }
    }

    /// Create one bookmark owned by `owner_id`.
    ///
    /// Title and url are trimmed before insertion. Returns the created
    /// record including its store-generated id and creation timestamp.
    ///
    /// # Errors
    /// - [`ValidationError`](MarqLinkError::ValidationError) when title or
    ///   url is empty after trimming, or when `owner_id` is empty.
    /// - [`StoreError`](MarqLinkError::StoreError) when the store rejects
    ///   the insert, including its ownership policy rejecting an `owner_id`
    ///   that does not match the authenticated identity.
    pub async fn add(&self, owner_id: &OwnerId, bookmark: NewBookmark) -> Result<Bookmark> {
        require_owner(owner_id, "add")?;
        let (title, url) = validate_payload(&bookmark)?;

        let request = AddBookmarkRequest {
            owner_id,
            title,
            url,
        };
        let endpoint = format!("{}/v1/api/bookmarks", self.base_url);
        debug!("[RECORDS] POST {} owner_id={}", endpoint, owner_id);

        let start = Instant::now();
        let req_builder = self.http_client.post(&endpoint).json(&request);
        let response = self.auth.resolve().await?.apply_to_request(req_builder);
        let response = response.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(status.as_u16(), response.text().await.ok()));
        }

        let created: Bookmark = response.json().await?;
        debug!(
            "[RECORDS] Created id={} duration_ms={}",
            created.id,
            start.elapsed().as_millis()
        );
        Ok(created)
    }

    /// List all bookmarks owned by `owner_id`, newest first.
    ///
    /// An empty `owner_id` returns an empty list **without contacting the
    /// store**: the deliberate guard for callers with no resolved identity,
    /// so they get an empty result instead of an unscoped query.
    pub async fn list(&self, owner_id: &OwnerId) -> Result<Vec<Bookmark>> {
        if owner_id.is_empty() {
            debug!("[RECORDS] list() with no resolved identity, returning empty");
            return Ok(Vec::new());
        }

        let endpoint = format!("{}/v1/api/bookmarks", self.base_url);
        debug!("[RECORDS] GET {} owner_id={}", endpoint, owner_id);

        let start = Instant::now();
        let req_builder = self
            .http_client
            .get(&endpoint)
            .query(&[("owner_id", owner_id.as_str())]);
        let response = self.auth.resolve().await?.apply_to_request(req_builder);
        let response = response.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(status.as_u16(), response.text().await.ok()));
        }

        let mut bookmarks: Vec<Bookmark> = response.json().await?;
        // Normalize ordering client-side so the contract holds regardless of
        // how the store happened to return the rows.
        sort_newest_first(&mut bookmarks);
        debug!(
            "[RECORDS] Listed {} records duration_ms={}",
            bookmarks.len(),
            start.elapsed().as_millis()
        );
        Ok(bookmarks)
    }

    /// Delete the bookmark with `bookmark_id`, scoped to `owner_id`.
    ///
    /// The record is deleted only when both id and owner match. Removing a
    /// non-existent or non-owned id is a silent no-op; the store's policy
    /// layer hides rows the caller does not own, so no distinct "not found"
    /// signal exists at this layer.
    pub async fn remove(&self, owner_id: &OwnerId, bookmark_id: &str) -> Result<()> {
        require_owner(owner_id, "remove")?;

        let endpoint = format!("{}/v1/api/bookmarks/{}", self.base_url, bookmark_id);
        debug!("[RECORDS] DELETE {} owner_id={}", endpoint, owner_id);

        let req_builder = self
            .http_client
            .delete(&endpoint)
            .query(&[("owner_id", owner_id.as_str())]);
        let response = self.auth.resolve().await?.apply_to_request(req_builder);
        let response = response.send().await?;

        let status = response.status();
        if status.is_success() || status.as_u16() == 404 {
            return Ok(());
        }

        Err(store_error(status.as_u16(), response.text().await.ok()))
    }
}

/// Reject add/remove calls with no resolved identity.
///
/// Stricter than the silent guard `list` applies: a mutation issued without
/// an owner id is caller misuse, reported as a validation failure instead of
/// silently doing nothing.
fn require_owner(owner_id: &OwnerId, operation: &str) -> Result<()> {
    if owner_id.is_empty() {
        return Err(MarqLinkError::ValidationError(format!(
            "{} requires a resolved owner id",
            operation
        )));
    }
    Ok(())
}

/// Trim and validate an add payload. Returns the trimmed (title, url).
fn validate_payload(bookmark: &NewBookmark) -> Result<(&str, &str)> {
    let title = bookmark.title.trim();
    let url = bookmark.url.trim();
    if title.is_empty() {
        return Err(MarqLinkError::ValidationError(
            "title must not be empty".to_string(),
        ));
    }
    if url.is_empty() {
        return Err(MarqLinkError::ValidationError(
            "url must not be empty".to_string(),
        ));
    }
    Ok((title, url))
}

/// Order records by creation time descending, id as tie-break.
fn sort_newest_first(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Map a non-success store response to a [`MarqLinkError::StoreError`],
/// extracting the store's error payload when it parses.
fn store_error(status_code: u16, body: Option<String>) -> MarqLinkError {
    let raw = body.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorDetail>(&raw) {
        Ok(detail) => detail.message,
        Err(_) if raw.is_empty() => "Unknown error".to_string(),
        Err(_) => raw,
    };
    warn!(
        "[RECORDS] Store rejected operation: status={} message=\"{}\"",
        status_code, message
    );
    MarqLinkError::StoreError {
        status_code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthProvider;

    fn service() -> BookmarkService {
        // Port 1 is never listening; any request that reaches the network
        // fails fast, proving guards short-circuit before transport.
        BookmarkService::new(
            "http://127.0.0.1:1".to_string(),
            reqwest::Client::new(),
            AuthProvider::bearer("test").into(),
        )
    }

    fn bookmark(id: &str, created_at: i64) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            owner_id: OwnerId::new("user_a"),
            title: "t".to_string(),
            url: "u".to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_list_with_empty_owner_skips_store() {
        let result = service().list(&OwnerId::new("")).await.unwrap();
        assert!(result.is_empty());

        let result = service().list(&OwnerId::new("   ")).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title_before_transport() {
        let err = service()
            .add(&OwnerId::new("user_a"), NewBookmark::new("  ", "http://x"))
            .await
            .unwrap_err();
        assert!(matches!(err, MarqLinkError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_url_before_transport() {
        let err = service()
            .add(&OwnerId::new("user_a"), NewBookmark::new("Docs", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, MarqLinkError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_mutations_reject_empty_owner() {
        let err = service()
            .add(&OwnerId::new(""), NewBookmark::new("Docs", "http://x"))
            .await
            .unwrap_err();
        assert!(matches!(err, MarqLinkError::ValidationError(_)));

        let err = service()
            .remove(&OwnerId::new(""), "bm_1")
            .await
            .unwrap_err();
        assert!(matches!(err, MarqLinkError::ValidationError(_)));
    }

    #[test]
    fn test_validate_payload_trims() {
        let payload = NewBookmark::new("  Docs  ", "  http://x  ");
        let (title, url) = validate_payload(&payload).unwrap();
        assert_eq!(title, "Docs");
        assert_eq!(url, "http://x");
    }

    #[test]
    fn test_sort_newest_first_with_id_tiebreak() {
        let mut rows = vec![bookmark("a", 1), bookmark("c", 3), bookmark("b", 3)];
        sort_newest_first(&mut rows);
        let ids: Vec<&str> = rows.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_store_error_extracts_detail_payload() {
        let err = store_error(
            403,
            Some(r#"{"code": "policy_violation", "message": "owner mismatch"}"#.to_string()),
        );
        match err {
            MarqLinkError::StoreError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 403);
                assert_eq!(message, "owner mismatch");
            },
            other => panic!("expected StoreError, got {:?}", other),
        }
    }

    #[test]
    fn test_store_error_falls_back_to_raw_body() {
        let err = store_error(500, Some("boom".to_string()));
        assert!(matches!(
            err,
            MarqLinkError::StoreError { message, .. } if message == "boom"
        ));

        let err = store_error(502, None);
        assert!(matches!(
            err,
            MarqLinkError::StoreError { message, .. } if message == "Unknown error"
        ));
    }
}

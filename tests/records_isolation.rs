//! Integration tests for the record service: CRUD round-trips, ordering,
//! validation, and cross-owner isolation.
//!
//! Requires a running Marq store and two configured test identities (see
//! `common/mod.rs`); tests skip when either is missing.

mod common;

use common::{client_for, is_server_running, test_owner_a, test_owner_b, unique_ident};
use marq_link::{MarqLinkError, NewBookmark};

#[tokio::test]
async fn test_add_list_remove_roundtrip() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let Some(owner) = test_owner_a() else {
        eprintln!("MARQ_TEST_OWNER_A not configured — skipping");
        return;
    };

    let client = client_for(&owner);
    let title = unique_ident("roundtrip");

    let created = client
        .records()
        .add(&owner.owner_id, NewBookmark::new(&title, "https://example.com/docs"))
        .await
        .expect("add should succeed");
    assert!(!created.id.is_empty());
    assert_eq!(created.owner_id, owner.owner_id);
    assert_eq!(created.title, title);

    let listed = client
        .records()
        .list(&owner.owner_id)
        .await
        .expect("list should succeed");
    assert!(
        listed.iter().any(|b| b.id == created.id),
        "created bookmark should appear in the owner's list"
    );

    client
        .records()
        .remove(&owner.owner_id, &created.id)
        .await
        .expect("remove should succeed");

    let after = client.records().list(&owner.owner_id).await.unwrap();
    assert!(
        after.iter().all(|b| b.id != created.id),
        "removed bookmark should be gone from the list"
    );
}

#[tokio::test]
async fn test_list_is_newest_first() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let Some(owner) = test_owner_a() else {
        eprintln!("MARQ_TEST_OWNER_A not configured — skipping");
        return;
    };

    let client = client_for(&owner);
    let mut created_ids = Vec::new();
    for i in 0..3 {
        let bookmark = client
            .records()
            .add(
                &owner.owner_id,
                NewBookmark::new(unique_ident(&format!("order_{}", i)), "https://example.com"),
            )
            .await
            .expect("add should succeed");
        created_ids.push(bookmark.id);
    }

    let listed = client.records().list(&owner.owner_id).await.unwrap();
    for pair in listed.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "list must be ordered newest first"
        );
    }

    for id in created_ids {
        client.records().remove(&owner.owner_id, &id).await.unwrap();
    }
}

#[tokio::test]
async fn test_rejected_add_creates_no_record() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let Some(owner) = test_owner_a() else {
        eprintln!("MARQ_TEST_OWNER_A not configured — skipping");
        return;
    };

    let client = client_for(&owner);
    let before = client.records().list(&owner.owner_id).await.unwrap().len();

    let err = client
        .records()
        .add(&owner.owner_id, NewBookmark::new("   ", "https://example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarqLinkError::ValidationError(_)));

    let after = client.records().list(&owner.owner_id).await.unwrap().len();
    assert_eq!(before, after, "failed validation must not create a record");
}

#[tokio::test]
async fn test_owners_cannot_see_each_other() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let (Some(owner_a), Some(owner_b)) = (test_owner_a(), test_owner_b()) else {
        eprintln!("two test identities not configured — skipping");
        return;
    };

    let client_a = client_for(&owner_a);
    let client_b = client_for(&owner_b);

    let created = client_a
        .records()
        .add(
            &owner_a.owner_id,
            NewBookmark::new(unique_ident("isolated"), "https://example.com"),
        )
        .await
        .expect("add should succeed");

    let b_list = client_b.records().list(&owner_b.owner_id).await.unwrap();
    assert!(
        b_list.iter().all(|bookmark| bookmark.id != created.id),
        "another owner's bookmark must never appear in a list"
    );

    client_a
        .records()
        .remove(&owner_a.owner_id, &created.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_of_foreign_record_is_a_noop() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let (Some(owner_a), Some(owner_b)) = (test_owner_a(), test_owner_b()) else {
        eprintln!("two test identities not configured — skipping");
        return;
    };

    let client_a = client_for(&owner_a);
    let client_b = client_for(&owner_b);

    let created = client_a
        .records()
        .add(
            &owner_a.owner_id,
            NewBookmark::new(unique_ident("foreign"), "https://example.com"),
        )
        .await
        .expect("add should succeed");

    // B attempts to delete A's record: silent no-op, record survives.
    client_b
        .records()
        .remove(&owner_b.owner_id, &created.id)
        .await
        .expect("foreign remove should be a silent no-op");

    let a_list = client_a.records().list(&owner_a.owner_id).await.unwrap();
    assert!(
        a_list.iter().any(|bookmark| bookmark.id == created.id),
        "record must survive another owner's delete attempt"
    );

    client_a
        .records()
        .remove(&owner_a.owner_id, &created.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_of_missing_id_is_a_noop() {
    if !is_server_running().await {
        eprintln!("server not running — skipping");
        return;
    }
    let Some(owner) = test_owner_a() else {
        eprintln!("MARQ_TEST_OWNER_A not configured — skipping");
        return;
    };

    let client = client_for(&owner);
    client
        .records()
        .remove(&owner.owner_id, &unique_ident("no_such_id"))
        .await
        .expect("removing a missing id should be a silent no-op");
}

//! Integration tests for the SQLite credential store.

use std::sync::Arc;

use store::{CredentialStore, NewAccount, SqliteStore, StoreError};

fn new_account(user_id: &str, username: &str, email: &str) -> NewAccount {
    NewAccount {
        user_id: user_id.into(),
        username: username.into(),
        email: email.into(),
        phone: "555-0100".into(),
        password_hash: "$2b$10$hash".into(),
    }
}

#[tokio::test]
async fn insert_then_find_by_username() {
    let store = SqliteStore::in_memory().await.unwrap();
    let id = store
        .insert(new_account("u1", "alice", "alice@example.com"))
        .await
        .unwrap();
    assert!(id > 0);

    let account = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(account.id, id);
    assert_eq!(account.user_id, "u1");
    assert_eq!(account.email, "alice@example.com");

    assert!(store.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_monotonic() {
    let store = SqliteStore::in_memory().await.unwrap();
    let first = store
        .insert(new_account("u1", "alice", "alice@example.com"))
        .await
        .unwrap();
    let second = store
        .insert(new_account("u2", "bob", "bob@example.com"))
        .await
        .unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn find_conflict_matches_any_identity_field() {
    let store = SqliteStore::in_memory().await.unwrap();
    store
        .insert(new_account("u1", "alice", "alice@example.com"))
        .await
        .unwrap();

    for (user_id, username, email) in [
        ("u1", "bob", "bob@example.com"),
        ("u2", "alice", "bob@example.com"),
        ("u2", "bob", "alice@example.com"),
        ("u2", "bob", "ALICE@EXAMPLE.COM"),
    ] {
        let conflict = store.find_conflict(user_id, username, email).await.unwrap();
        assert!(conflict.is_some(), "expected conflict for {username}/{email}");
    }

    let clear = store
        .find_conflict("u2", "bob", "bob@example.com")
        .await
        .unwrap();
    assert!(clear.is_none());
}

#[tokio::test]
async fn insert_rejects_each_duplicate_field() {
    let store = SqliteStore::in_memory().await.unwrap();
    store
        .insert(new_account("u1", "alice", "alice@example.com"))
        .await
        .unwrap();

    for dup in [
        new_account("u1", "bob", "bob@example.com"),
        new_account("u2", "alice", "bob@example.com"),
        new_account("u2", "bob", "alice@example.com"),
    ] {
        assert!(matches!(store.insert(dup).await, Err(StoreError::Conflict)));
    }
}

#[tokio::test]
async fn concurrent_duplicate_usernames_admit_exactly_one() {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());

    let a = tokio::spawn({
        let store = store.clone();
        async move { store.insert(new_account("u1", "alice", "a1@example.com")).await }
    });
    let b = tokio::spawn({
        let store = store.clone();
        async move { store.insert(new_account("u2", "alice", "a2@example.com")).await }
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::Conflict)))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);
}

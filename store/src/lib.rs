//! Core `store` crate for durable account credential storage.
//!
//! This crate defines the `CredentialStore` trait, which outlines the storage
//! operations the account service depends on, and provides the concrete
//! implementations (SQLite-backed and in-memory).

pub mod errors;
pub mod memory;
pub mod models;
pub mod sqlite;

pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{Account, NewAccount};
pub use sqlite::SqliteStore;

use async_trait::async_trait;

/// Storage abstraction for account records.
///
/// The service layer holds this as a trait object so the SQLite store can be
/// swapped for the in-memory store in tests. Implementations must enforce
/// uniqueness of `user_id`, `username`, and `email` at write time; the
/// `find_conflict` pre-check is advisory only.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns any existing account whose `user_id`, `username`, or `email`
    /// matches the given values. Email is compared case-insensitively.
    async fn find_conflict(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, StoreError>;

    /// Atomically creates a new account and returns its assigned id.
    ///
    /// Fails with [`StoreError::Conflict`] if any of the unique fields is
    /// already taken, including when a concurrent insert wins the race.
    async fn insert(&self, account: NewAccount) -> Result<i64, StoreError>;

    /// Exact-match lookup by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;
}

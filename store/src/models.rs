//! Data models for the `store` crate.
//!
//! These structs map the `users` table: the persisted `Account` record and
//! the `NewAccount` payload for rows that have not been assigned an id yet.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account record as stored in the `users` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Account {
    /// Surrogate key assigned by the store, monotonically increasing.
    pub id: i64,
    /// Externally supplied identifier, unique across accounts.
    pub user_id: String,
    /// Login key, unique across accounts.
    pub username: String,
    /// Stored lowercased and trimmed, unique across accounts.
    pub email: String,
    /// Free-form, presence only.
    pub phone: String,
    /// bcrypt hash of the account password, never serialized out.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Fields for a not-yet-persisted account.
///
/// The service layer normalizes `email` and hashes the password before
/// constructing this.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

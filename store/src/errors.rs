//! Custom error types specific to the `store` crate.
//!
//! This module defines the errors that can occur while persisting or looking
//! up account records, providing a unified error handling mechanism for all
//! store implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint on `user_id`, `username`, or `email` was violated.
    #[error("user id, username, or email already exists")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

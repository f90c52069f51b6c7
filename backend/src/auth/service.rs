//! Core business logic for the account credential service.
//!
//! Validates input, orchestrates bcrypt hashing on the blocking thread pool,
//! and translates store outcomes into the API error taxonomy. Holds the
//! credential store as an injected trait object so tests can substitute the
//! in-memory implementation.

use std::sync::Arc;

use tokio::task;

use store::{CredentialStore, NewAccount};

use super::errors::AuthError;
use super::models::RegisterRequest;

/// bcrypt work factor; existing accounts were hashed at this cost.
const BCRYPT_COST: u32 = 10;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Creates a new account.
    ///
    /// The conflict pre-check keeps the common duplicate case off the write
    /// path, but the store's unique constraints remain the authoritative
    /// guard: a lost insert race surfaces as the same conflict error.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        let user_id = request.user_id.trim().to_owned();
        let username = request.username.trim().to_owned();
        let email = request.email.trim().to_lowercase();

        if user_id.is_empty()
            || username.is_empty()
            || email.is_empty()
            || request.phone.is_empty()
            || request.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if request.password.chars().count() < 6 {
            return Err(AuthError::PasswordTooShort);
        }

        if self
            .store
            .find_conflict(&user_id, &username, &email)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateIdentity);
        }

        // CPU-bound; keep it off the async workers.
        let password = request.password;
        let password_hash =
            task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

        self.store
            .insert(NewAccount {
                user_id,
                username,
                email,
                phone: request.phone,
                password_hash,
            })
            .await?;

        Ok(())
    }

    /// Checks a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both return
    /// [`AuthError::InvalidCredentials`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let Some(account) = self.store.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let password = password.to_owned();
        let verified =
            task::spawn_blocking(move || bcrypt::verify(password, &account.password_hash))
                .await??;
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(())
    }
}

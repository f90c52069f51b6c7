//! In-memory implementation of the credential store.
//!
//! Mirrors the SQLite store's uniqueness semantics without durable storage,
//! so the service and HTTP layers can be tested against a substitute store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{Account, NewAccount};
use crate::CredentialStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_identity(account: &Account, user_id: &str, username: &str, email: &str) -> bool {
    account.user_id == user_id
        || account.username == username
        || account.email.eq_ignore_ascii_case(email)
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_conflict(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| matches_identity(a, user_id, username, email))
            .cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<i64, StoreError> {
        // Check and push under one write lock so racing inserts serialize.
        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|a| matches_identity(a, &account.user_id, &account.username, &account.email))
        {
            return Err(StoreError::Conflict);
        }

        let id = accounts.last().map_or(0, |a| a.id) + 1;
        accounts.push(Account {
            id,
            user_id: account.user_id,
            username: account.username,
            email: account.email,
            phone: account.phone,
            password_hash: account.password_hash,
        });

        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }
}

//! SQLite-backed implementation of the credential store.
//!
//! Owns the connection pool and centralizes every query against the `users`
//! table. The schema is applied on connect, and the table's unique indexes
//! are the authoritative guard against duplicate identities.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::errors::StoreError;
use crate::models::{Account, NewAccount};
use crate::CredentialStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL,
    password_hash TEXT NOT NULL
)";

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens the database at `url` (creating the file if missing) and
    /// applies the schema.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory database, pinned to a single connection: every pooled
    /// `sqlite::memory:` connection would otherwise open a distinct database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn find_conflict(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, user_id, username, email, phone, password_hash FROM users \
             WHERE user_id = ?1 OR username = ?2 OR LOWER(email) = LOWER(?3)",
        )
        .bind(user_id)
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn insert(&self, account: NewAccount) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (user_id, username, email, phone, password_hash) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&account.user_id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.phone)
        .bind(&account.password_hash)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::Conflict)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, user_id, username, email, phone, password_hash FROM users \
             WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }
}

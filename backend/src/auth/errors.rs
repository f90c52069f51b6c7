//! Custom error types specific to authentication failures.
//!
//! Maps every failure to the stable taxonomy the API exposes: validation
//! defects (400), duplicate identities (409), the deliberately opaque
//! invalid-credentials outcome (401), and internal faults (500) whose detail
//! is logged but never returned to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use store::StoreError;

use crate::errors::ErrorResponse;

#[derive(Debug, Error)]
pub enum AuthError {
    /// One of the registration fields was empty.
    #[error("All fields are required.")]
    MissingFields,

    /// Username or password was empty on login.
    #[error("Username and password are required.")]
    MissingCredentials,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    /// Another account already holds the user id, username, or email. Which
    /// field collided is not disclosed.
    #[error("User ID, username, or email already exists.")]
    DuplicateIdentity,

    /// Unknown usernames and wrong passwords collapse to this one variant so
    /// the response cannot be used to enumerate accounts.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Internal server error.")]
    Internal(#[source] InternalError),
}

/// Store or hashing failures hidden behind the opaque 500 message.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error(transparent)]
    Store(StoreError),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            // A concurrent register won the insert race; same outcome as the
            // advisory pre-check.
            StoreError::Conflict => AuthError::DuplicateIdentity,
            other => AuthError::Internal(InternalError::Store(other)),
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AuthError::Internal(err.into())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(err.into())
    }
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingFields
            | AuthError::MissingCredentials
            | AuthError::PasswordTooShort => StatusCode::BAD_REQUEST,
            AuthError::DuplicateIdentity => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(source) = &self {
            error!("internal error serving auth request: {source}");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

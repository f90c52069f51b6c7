//! Defines the HTTP routes specifically for authentication.
//!
//! These routes map the register and login endpoints to their handlers and
//! are nested under `/api` by the main router.

use axum::{Router, routing::post};

use crate::AppState;

use super::handlers::{login, register};

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

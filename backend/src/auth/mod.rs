//! Authentication module for account registration and login.
//!
//! This module provides the public interface for the account credential
//! service: request validation, password hashing, and the HTTP surface for
//! register and login.

pub mod routes;
pub mod handlers;
pub mod models;
pub mod service;
pub mod errors;

// Re-exports for convenience
pub use handlers::*;
pub use models::*;
pub use routes::*;
pub use service::*;
pub use errors::*;

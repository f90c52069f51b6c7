//! Global application response envelopes.
//!
//! This module defines the JSON bodies every endpoint responds with, keeping
//! error and success formatting consistent across the API.

use serde::Serialize;

/// Body for every error status: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for every success status: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

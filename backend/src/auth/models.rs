//! Data structures for authentication requests.
//!
//! Wire names are camelCase to match the frontend's JSON. Absent fields
//! deserialize to empty strings so they fall into the missing-field
//! validation path instead of a deserialization rejection.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse incoming register and login requests, delegate to
//! the `auth::service` for core business logic, and shape the JSON success
//! envelopes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::errors::MessageResponse;

use super::errors::AuthError;
use super::models::{LoginRequest, RegisterRequest};

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    state.accounts.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful.".into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state
        .accounts
        .authenticate(&request.username, &request.password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Login successful.".into(),
    }))
}

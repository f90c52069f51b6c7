//! General-purpose middleware for the API.
//!
//! This module contains reusable middleware components applied to the main
//! router; currently the CORS layer admitting the external landing-page
//! frontend.

use std::time::Duration;

use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

//! Account credential service backend.
//!
//! Initializes the axum web server, connects the credential store, and
//! registers the API routes and middleware. The external landing-page
//! frontend consumes this service through the JSON endpoints under `/api`.

use std::sync::Arc;

use axum::Router;
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use store::SqliteStore;

pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;

use auth::service::AccountService;
use config::Config;

/// Shared handles available to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
}

/// Assembles the application router around the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", auth::routes::auth_router())
        .layer(middleware::cors_layer())
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    info!("Opening credential store at {}", config.database_url);
    let store = SqliteStore::connect(&config.database_url)
        .await
        .expect("Failed to open credential store");

    let state = AppState {
        accounts: AccountService::new(Arc::new(store)),
    };

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

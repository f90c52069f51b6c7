//! Main entry point for the account service backend.
//!
//! Startup, routing, and state live in the library crate; this binary only
//! launches the server.

#[tokio::main]
async fn main() {
    backend::start_server().await;
}

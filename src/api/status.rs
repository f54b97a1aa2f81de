//! The status route (`GET /`).
//!
//! Reports the configured port as plain text. Deliberately the only route;
//! anything else falls through to axum's default `404 Not Found`.

use axum::{extract::State, routing::get, Router};

use crate::config::ServerConfig;

/// Build the status server router.
///
/// The configuration travels in as router state so the handler never
/// consults process-global state.
pub fn router(config: ServerConfig) -> Router {
    Router::new().route("/", get(report_port)).with_state(config)
}

/// `GET /` — plain-text report of the configured port.
///
/// Example body: `Server started in port 8080`.
async fn report_port(State(config): State<ServerConfig>) -> String {
    format!("Server started in port {}", config.port)
}

//! HTTP API over the calculator.
//!
//! Endpoints:
//! - `GET /state`: report and layout for the household the server was started with
//! - `POST /simulate`: report and layout for a raw form snapshot
//! - `GET /loads`: appliance catalog
//! - `GET /layout?panels=N&batteries=M`: grid placements only

mod handlers;
/// Request and response bodies.
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::config::HouseholdConfig;
use crate::input::SimulationInput;

/// Largest panel or battery count the API will lay out.
pub const MAX_LAYOUT_INSTANCES: u32 = 10_000;

/// Immutable application state shared across all request handlers.
///
/// Every request recomputes from scratch, so no locks are needed.
pub struct AppState {
    /// Configuration the server was started with.
    pub household: HouseholdConfig,
    /// Calculator input derived from `household` plus CLI overrides.
    pub input: SimulationInput,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/simulate", post(handlers::post_simulate))
        .route("/loads", get(handlers::get_loads))
        .route("/layout", get(handlers::get_layout))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}

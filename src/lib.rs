//! Parking management service
//!
//! Check-in and check-out of vehicles in a single parking facility, with
//! per-type pricing, first-fit lot allocation and a persistent append-only
//! ledger kept as whole-table JSON files.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_for;
use crate::routes::{create_api_router, API_PREFIX};
use crate::state::AppState;

/// Full application router, ready to be served.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_for(&state.config.cors_origins);

    Router::new()
        .nest(API_PREFIX, create_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

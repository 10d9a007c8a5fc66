//! HTTP routes
//!
//! Everything is served under `/api/v1/parking-management`.

pub mod parking_lot_routes;
pub mod parking_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1/parking-management";

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .merge(parking_routes::create_parking_router())
        .nest("/parking-lots", parking_lot_routes::create_parking_lot_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "service": "parking-management",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::ParkingController;
use crate::dto::parking_dto::{
    CheckInRequest, CheckInResponse, CheckOutRequest, CheckOutResponse, CountByTypeQuery,
    PlatesByColorQuery, PlatesResponse, VehicleCountResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parking_router() -> Router<AppState> {
    Router::new()
        .route("/parking-in", post(check_in))
        .route("/parking-out", post(check_out))
        .route("/parking-data/plates", get(plates_by_color))
        .route("/parking-data/count", get(count_by_type))
}

async fn check_in(
    State(state): State<AppState>,
    Json(request): Json<CheckInRequest>,
) -> Result<Json<ApiResponse<CheckInResponse>>, AppError> {
    let controller = ParkingController::new(state.parking.clone());
    let response = controller.check_in(request).await?;
    Ok(Json(response))
}

async fn check_out(
    State(state): State<AppState>,
    Json(request): Json<CheckOutRequest>,
) -> Result<Json<ApiResponse<CheckOutResponse>>, AppError> {
    let controller = ParkingController::new(state.parking.clone());
    let response = controller.check_out(request).await?;
    Ok(Json(response))
}

async fn plates_by_color(
    State(state): State<AppState>,
    Query(query): Query<PlatesByColorQuery>,
) -> Result<Json<PlatesResponse>, AppError> {
    let controller = ParkingController::new(state.parking.clone());
    let response = controller.plates_by_color(query).await?;
    Ok(Json(response))
}

async fn count_by_type(
    State(state): State<AppState>,
    Query(query): Query<CountByTypeQuery>,
) -> Result<Json<VehicleCountResponse>, AppError> {
    let controller = ParkingController::new(state.parking.clone());
    let response = controller.count_by_type(query).await?;
    Ok(Json(response))
}

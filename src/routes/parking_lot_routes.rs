use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ParkingLotController;
use crate::dto::parking_lot_dto::{CreateParkingLotRequest, ParkingLotResponse, UpdateParkingLotRequest};
use crate::dto::{ApiResponse, ListParams};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parking_lot_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parking_lots).post(create_parking_lot))
        .route(
            "/:id",
            get(get_parking_lot)
                .put(update_parking_lot)
                .delete(delete_parking_lot),
        )
}

fn controller(state: &AppState) -> ParkingLotController {
    ParkingLotController::new(state.store.clone(), state.locks.clone())
}

async fn create_parking_lot(
    State(state): State<AppState>,
    Json(request): Json<CreateParkingLotRequest>,
) -> Result<Json<ApiResponse<ParkingLotResponse>>, AppError> {
    let response = controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_parking_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ParkingLotResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_parking_lots(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ParkingLotResponse>>, AppError> {
    let response = controller(&state).list(params).await?;
    Ok(Json(response))
}

async fn update_parking_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateParkingLotRequest>,
) -> Result<Json<ApiResponse<ParkingLotResponse>>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_parking_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = controller(&state).delete(id).await?;
    Ok(Json(response))
}

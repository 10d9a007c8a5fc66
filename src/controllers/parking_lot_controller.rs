use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::database::{RecordStore, TableLocks};
use crate::dto::parking_lot_dto::{CreateParkingLotRequest, ParkingLotResponse, UpdateParkingLotRequest};
use crate::dto::{ApiResponse, ListParams};
use crate::models::parking_lot::PARKING_LOT_TABLE;
use crate::models::{next_id, ParkingLot};
use crate::repositories::parking_lot_repository::{name_taken, position_by_id, search_active};
use crate::repositories::ParkingLotRepository;
use crate::utils::errors::{conflict_error, not_found_error, reasons, AppResult};
use crate::utils::validation::validate_request;

#[derive(Clone)]
pub struct ParkingLotController {
    repository: ParkingLotRepository,
    locks: TableLocks,
}

impl ParkingLotController {
    pub fn new(store: Arc<dyn RecordStore>, locks: TableLocks) -> Self {
        Self {
            repository: ParkingLotRepository::new(store),
            locks,
        }
    }

    pub async fn create(
        &self,
        request: CreateParkingLotRequest,
    ) -> AppResult<ApiResponse<ParkingLotResponse>> {
        validate_request(&request)?;
        let _guard = self.locks.acquire(&[PARKING_LOT_TABLE]).await;

        let mut lots = self.repository.load_all().await?;
        if name_taken(&lots, &request.name, None) {
            return Err(conflict_error(reasons::PARKING_AREA_NAME_TAKEN));
        }

        let lot = ParkingLot::new(next_id(&lots), request.name, request.floor, Utc::now());
        let response = ParkingLotResponse::from(&lot);
        lots.push(lot);
        self.repository.save_all(&lots).await?;

        info!("Parking lot {} created on floor {}", response.name, response.floor);
        Ok(ApiResponse::success_with_message(
            response,
            "Parking lot created".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ParkingLotResponse> {
        let lots = self.repository.load_all().await?;
        lots.iter()
            .find(|lot| lot.id == id && !lot.is_deleted())
            .map(ParkingLotResponse::from)
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))
    }

    pub async fn list(&self, params: ListParams) -> AppResult<Vec<ParkingLotResponse>> {
        validate_request(&params)?;

        let lots = self.repository.load_all().await?;
        let found: Vec<ParkingLotResponse> = search_active(&lots, params.search.as_deref())
            .into_iter()
            .map(ParkingLotResponse::from)
            .collect();

        Ok(params.paginate(found))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateParkingLotRequest,
    ) -> AppResult<ApiResponse<ParkingLotResponse>> {
        validate_request(&request)?;
        let _guard = self.locks.acquire(&[PARKING_LOT_TABLE]).await;

        let mut lots = self.repository.load_all().await?;
        let index = position_by_id(&lots, id)
            .filter(|&index| !lots[index].is_deleted())
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))?;

        if lots[index].is_occupied {
            return Err(conflict_error(reasons::PARKING_AREA_OCCUPIED));
        }
        if name_taken(&lots, &request.name, Some(id)) {
            return Err(conflict_error(reasons::PARKING_AREA_NAME_TAKEN));
        }

        let lot = &mut lots[index];
        lot.name = request.name;
        lot.floor = request.floor;
        lot.updated_at = Utc::now();
        let response = ParkingLotResponse::from(&*lot);

        self.repository.save_all(&lots).await?;

        info!("Parking lot {} updated", id);
        Ok(ApiResponse::success_with_message(
            response,
            "Parking lot updated".to_string(),
        ))
    }

    /// Soft delete: the row stays in the table with `deleted_at` set.
    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<()>> {
        let _guard = self.locks.acquire(&[PARKING_LOT_TABLE]).await;

        let mut lots = self.repository.load_all().await?;
        let index = position_by_id(&lots, id)
            .filter(|&index| !lots[index].is_deleted())
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))?;

        if lots[index].is_occupied {
            return Err(conflict_error(reasons::PARKING_AREA_OCCUPIED));
        }

        let now = Utc::now();
        lots[index].deleted_at = Some(now);
        lots[index].updated_at = now;
        self.repository.save_all(&lots).await?;

        info!("Parking lot {} deleted", id);
        Ok(ApiResponse::message("Parking lot deleted".to_string()))
    }
}

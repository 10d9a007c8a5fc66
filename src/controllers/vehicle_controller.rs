use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::database::{RecordStore, TableLocks};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::{ApiResponse, ListParams};
use crate::models::vehicle::VEHICLE_TABLE;
use crate::models::{next_id, VehicleCatalogEntry};
use crate::repositories::vehicle_repository::{position_by_id, search_active};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, reasons, AppResult};
use crate::utils::validation::validate_request;

#[derive(Clone)]
pub struct VehicleController {
    repository: VehicleRepository,
    locks: TableLocks,
}

impl VehicleController {
    pub fn new(store: Arc<dyn RecordStore>, locks: TableLocks) -> Self {
        Self {
            repository: VehicleRepository::new(store),
            locks,
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        validate_request(&request)?;
        let _guard = self.locks.acquire(&[VEHICLE_TABLE]).await;

        let mut entries = self.repository.load_all().await?;
        let now = Utc::now();
        let entry = VehicleCatalogEntry {
            id: next_id(&entries),
            name: request.name,
            vehicle_type: request.vehicle_type,
            first_hour_price: request.first_hour_price,
            price_per_hour_percent: request.price_per_hour_percent,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let response = VehicleResponse::from(&entry);
        entries.push(entry);
        self.repository.save_all(&entries).await?;

        info!("Vehicle type {} registered", response.vehicle_type);
        Ok(ApiResponse::success_with_message(
            response,
            "Vehicle created".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<VehicleResponse> {
        let entries = self.repository.load_all().await?;
        entries
            .iter()
            .find(|entry| entry.id == id && !entry.is_deleted())
            .map(VehicleResponse::from)
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))
    }

    pub async fn list(&self, params: ListParams) -> AppResult<Vec<VehicleResponse>> {
        validate_request(&params)?;

        let entries = self.repository.load_all().await?;
        let found: Vec<VehicleResponse> = search_active(&entries, params.search.as_deref())
            .into_iter()
            .map(VehicleResponse::from)
            .collect();

        Ok(params.paginate(found))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        validate_request(&request)?;
        let _guard = self.locks.acquire(&[VEHICLE_TABLE]).await;

        let mut entries = self.repository.load_all().await?;
        let index = position_by_id(&entries, id)
            .filter(|&index| !entries[index].is_deleted())
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))?;

        let entry = &mut entries[index];
        entry.name = request.name;
        entry.vehicle_type = request.vehicle_type;
        entry.first_hour_price = request.first_hour_price;
        entry.price_per_hour_percent = request.price_per_hour_percent;
        entry.updated_at = Utc::now();
        let response = VehicleResponse::from(&*entry);

        self.repository.save_all(&entries).await?;

        info!("Vehicle {} updated", id);
        Ok(ApiResponse::success_with_message(
            response,
            "Vehicle updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<()>> {
        let _guard = self.locks.acquire(&[VEHICLE_TABLE]).await;

        let mut entries = self.repository.load_all().await?;
        let index = position_by_id(&entries, id)
            .filter(|&index| !entries[index].is_deleted())
            .ok_or_else(|| not_found_error(reasons::DATA_NOT_FOUND))?;

        let now = Utc::now();
        entries[index].deleted_at = Some(now);
        entries[index].updated_at = now;
        self.repository.save_all(&entries).await?;

        info!("Vehicle {} deleted", id);
        Ok(ApiResponse::message("Vehicle deleted".to_string()))
    }
}

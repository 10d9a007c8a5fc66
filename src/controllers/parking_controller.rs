use crate::dto::parking_dto::{
    CheckInRequest, CheckInResponse, CheckOutRequest, CheckOutResponse, CountByTypeQuery,
    PlatesByColorQuery, PlatesResponse, VehicleCountResponse,
};
use crate::dto::ApiResponse;
use crate::services::ParkingService;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_request;

#[derive(Clone)]
pub struct ParkingController {
    service: ParkingService,
}

impl ParkingController {
    pub fn new(service: ParkingService) -> Self {
        Self { service }
    }

    pub async fn check_in(&self, request: CheckInRequest) -> AppResult<ApiResponse<CheckInResponse>> {
        validate_request(&request)?;

        let receipt = self
            .service
            .check_in(
                request.plate_number.trim(),
                request.vehicle_type.trim(),
                request.color.trim(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            receipt.into(),
            "Vehicle checked in".to_string(),
        ))
    }

    pub async fn check_out(&self, request: CheckOutRequest) -> AppResult<ApiResponse<CheckOutResponse>> {
        validate_request(&request)?;

        let invoice = self.service.check_out(request.plate_number.trim()).await?;

        Ok(ApiResponse::success_with_message(
            invoice.into(),
            "Vehicle checked out".to_string(),
        ))
    }

    pub async fn plates_by_color(&self, query: PlatesByColorQuery) -> AppResult<PlatesResponse> {
        validate_request(&query)?;

        let plate_numbers = self.service.find_plates_by_color(query.color.trim()).await?;
        Ok(PlatesResponse { plate_numbers })
    }

    pub async fn count_by_type(&self, query: CountByTypeQuery) -> AppResult<VehicleCountResponse> {
        validate_request(&query)?;

        let total = self.service.count_vehicles_by_type(query.vehicle_type.trim()).await?;
        Ok(VehicleCountResponse { total })
    }
}

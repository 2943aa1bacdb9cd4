//! Vehicle HTTP handlers.
//!
//! ```text
//! POST /api/v1/vehicles {"shortcode":"abcd","battery":17,"latitude":45,"longitude":45}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::{CreateVehicleRequest, CreateVehicleResponse};
use crate::domain::{Error, Vehicle, VehicleDraft, invalid_create_vehicle_request};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a vehicle.
///
/// Every field is optional here so that missing values surface as
/// validation violations rather than as deserialisation failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequestBody {
    #[schema(example = "abcd", min_length = 4, max_length = 4)]
    pub shortcode: Option<String>,
    #[schema(example = 17.0)]
    pub battery: Option<f64>,
    #[schema(example = 45.0)]
    pub latitude: Option<f64>,
    #[schema(example = 45.0)]
    pub longitude: Option<f64>,
}

impl From<CreateVehicleRequestBody> for VehicleDraft {
    fn from(value: CreateVehicleRequestBody) -> Self {
        Self {
            shortcode: value.shortcode,
            battery: value.battery,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Response payload for vehicle creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleResponseBody {
    pub vehicle: Vehicle,
}

impl From<CreateVehicleResponse> for CreateVehicleResponseBody {
    fn from(value: CreateVehicleResponse) -> Self {
        Self {
            vehicle: value.vehicle,
        }
    }
}

/// Violation reported when the body cannot be read as a create request.
pub const MALFORMED_BODY_VIOLATION: &str =
    "Request body must be a JSON object with shortcode, battery, latitude and longitude";

/// JSON extractor configuration for the vehicle endpoints.
///
/// Malformed bodies and wrongly typed fields are reported with the same
/// error shape as validation failures. The parser's own message is only
/// logged.
pub fn create_vehicle_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "create vehicle payload rejected");
        let error: Error = invalid_create_vehicle_request([MALFORMED_BODY_VIOLATION.to_owned()]);
        error.into()
    })
}

/// Create a vehicle.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use fleet_backend::inbound::http::vehicles::{create_vehicle, create_vehicle_json_config};
///
/// let app = App::new().service(
///     web::scope("/api/v1")
///         .app_data(create_vehicle_json_config())
///         .service(create_vehicle),
/// );
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    request_body = CreateVehicleRequestBody,
    responses(
        (status = 200, description = "Vehicle created", body = CreateVehicleResponseBody),
        (status = 400, description = "Invalid create vehicle request", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Vehicle store unavailable", body = Error)
    ),
    tags = ["vehicles"],
    operation_id = "createVehicle"
)]
#[post("/vehicles")]
pub async fn create_vehicle(
    state: web::Data<HttpState>,
    payload: web::Json<CreateVehicleRequestBody>,
) -> ApiResult<web::Json<CreateVehicleResponseBody>> {
    let response = state
        .vehicles
        .create_vehicle(CreateVehicleRequest {
            vehicle: VehicleDraft::from(payload.into_inner()),
        })
        .await?;

    Ok(web::Json(CreateVehicleResponseBody::from(response)))
}

#[cfg(test)]
#[path = "vehicles_tests.rs"]
mod tests;

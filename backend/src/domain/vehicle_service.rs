//! Vehicle command service.
//!
//! Validates create requests and delegates persistence to a
//! [`VehicleStore`]. Invalid requests never reach the store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateVehicleRequest, CreateVehicleResponse, VehicleCommand, VehicleStore, VehicleStoreError,
};
use crate::domain::{Error, NewVehicle, VehicleViolations};

/// Message attached to every rejected create request.
pub const INVALID_CREATE_VEHICLE_REQUEST: &str = "Invalid create vehicle request";

/// Build the error returned for a rejected create request.
///
/// # Examples
/// ```
/// use fleet_backend::domain::{ErrorCode, invalid_create_vehicle_request};
///
/// let err = invalid_create_vehicle_request(["Battery is required".to_owned()]);
/// assert_eq!(err.code(), ErrorCode::BadRequest);
/// assert_eq!(err.violations(), vec!["Battery is required"]);
/// ```
pub fn invalid_create_vehicle_request(violations: impl IntoIterator<Item = String>) -> Error {
    let violations: Vec<String> = violations.into_iter().collect();
    Error::bad_request(INVALID_CREATE_VEHICLE_REQUEST)
        .with_details(json!({ "violations": violations }))
}

fn map_violations(violations: VehicleViolations) -> Error {
    invalid_create_vehicle_request(violations.messages())
}

fn map_store_error(error: VehicleStoreError) -> Error {
    match error {
        VehicleStoreError::Connection { message } => {
            Error::service_unavailable(format!("vehicle store unavailable: {message}"))
        }
        VehicleStoreError::Query { message } => {
            Error::internal(format!("vehicle store error: {message}"))
        }
    }
}

/// Vehicle service implementing the command driving port.
///
/// `S` may be a concrete store or `dyn VehicleStore` when the store is shared
/// with other consumers such as the readiness check.
pub struct VehicleCommandService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for VehicleCommandService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ?Sized> VehicleCommandService<S> {
    /// Create a command service backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> VehicleCommand for VehicleCommandService<S>
where
    S: VehicleStore + ?Sized,
{
    async fn create_vehicle(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<CreateVehicleResponse, Error> {
        let new_vehicle = NewVehicle::try_from(request.vehicle).map_err(|violations| {
            debug!(%violations, "rejected create vehicle request");
            map_violations(violations)
        })?;

        let vehicle = self
            .store
            .create_vehicle(&new_vehicle)
            .await
            .map_err(map_store_error)?;

        info!(
            vehicle_id = %vehicle.id(),
            shortcode = %vehicle.shortcode(),
            "vehicle created"
        );
        Ok(CreateVehicleResponse { vehicle })
    }
}

#[cfg(test)]
#[path = "vehicle_service_tests.rs"]
mod tests;

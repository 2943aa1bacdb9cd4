//! Driving port for vehicle mutations.
//!
//! Inbound adapters hand over the raw request fields; implementations
//! validate them, persist through a [`super::VehicleStore`] and answer with
//! the stored vehicle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Vehicle, VehicleDraft};

/// Request to create a vehicle from unvalidated input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub vehicle: VehicleDraft,
}

/// Response carrying the vehicle created by the store.
///
/// Serialises as `{"vehicle": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleResponse {
    pub vehicle: Vehicle,
}

/// Driving port for vehicle write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleCommand: Send + Sync {
    /// Validate the request and create the vehicle.
    ///
    /// Fails with [`crate::domain::ErrorCode::BadRequest`] listing every
    /// violation under `details.violations` when the request is invalid. No
    /// store call happens in that case.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use fleet_backend::domain::VehicleCommandService;
    /// use fleet_backend::domain::VehicleDraft;
    /// use fleet_backend::domain::ports::{
    ///     CreateVehicleRequest, FixtureVehicleStore, VehicleCommand,
    /// };
    ///
    /// # async fn example() -> Result<(), fleet_backend::domain::Error> {
    /// let command = VehicleCommandService::new(Arc::new(FixtureVehicleStore::new()));
    /// let response = command
    ///     .create_vehicle(CreateVehicleRequest {
    ///         vehicle: VehicleDraft {
    ///             shortcode: Some("abcd".to_owned()),
    ///             battery: Some(17.0),
    ///             latitude: Some(45.0),
    ///             longitude: Some(45.0),
    ///         },
    ///     })
    ///     .await?;
    /// assert_eq!(response.vehicle.shortcode().as_str(), "abcd");
    /// # Ok(())
    /// # }
    /// ```
    async fn create_vehicle(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<CreateVehicleResponse, Error>;
}

//! Driven port for vehicle persistence.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::{NewVehicle, Vehicle, VehicleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by vehicle store adapters.
    pub enum VehicleStoreError {
        /// The store could not be reached.
        Connection { message: String } => "vehicle store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "vehicle store query failed: {message}",
    }
}

/// Port for persisting vehicles. Stores own identity assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Persist a validated vehicle and return it with its assigned id.
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleStoreError>;

    /// Check that the store can currently serve requests.
    async fn ping(&self) -> Result<(), VehicleStoreError>;
}

/// In-process store used when no database is configured.
///
/// Identifiers come from an atomic sequence starting at 1, so concurrent
/// creates always receive distinct ids. Nothing is retained.
#[derive(Debug)]
pub struct FixtureVehicleStore {
    next_id: AtomicI64,
}

impl FixtureVehicleStore {
    /// Create a store whose first vehicle receives id 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a store whose first vehicle receives `first_id`.
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            next_id: AtomicI64::new(first_id),
        }
    }
}

impl Default for FixtureVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStore for FixtureVehicleStore {
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleStoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(vehicle.clone().into_vehicle(VehicleId::new(id)))
    }

    async fn ping(&self) -> Result<(), VehicleStoreError> {
        Ok(())
    }
}

//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`VehicleCommand`]) are called by inbound adapters. Driven
//! ports ([`VehicleStore`]) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod vehicle_command;
mod vehicle_store;

#[cfg(test)]
pub use vehicle_command::MockVehicleCommand;
pub use vehicle_command::{CreateVehicleRequest, CreateVehicleResponse, VehicleCommand};
#[cfg(test)]
pub use vehicle_store::MockVehicleStore;
pub use vehicle_store::{FixtureVehicleStore, VehicleStore, VehicleStoreError};

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::VehicleCommand;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fleet_backend::domain::VehicleCommandService;
/// use fleet_backend::domain::ports::FixtureVehicleStore;
/// use fleet_backend::inbound::http::state::HttpState;
///
/// let command = VehicleCommandService::new(Arc::new(FixtureVehicleStore::new()));
/// let state = HttpState::new(Arc::new(command));
/// let _vehicles = state.vehicles.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub vehicles: Arc<dyn VehicleCommand>,
}

impl HttpState {
    /// Construct state from the vehicle command port.
    pub fn new(vehicles: Arc<dyn VehicleCommand>) -> Self {
        Self { vehicles }
    }
}

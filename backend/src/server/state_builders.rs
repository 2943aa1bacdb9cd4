//! Builders wiring domain services to their driven adapters.

use std::sync::Arc;

use actix_web::web;

use fleet_backend::domain::VehicleCommandService;
use fleet_backend::domain::ports::{FixtureVehicleStore, VehicleStore};
use fleet_backend::inbound::http::state::HttpState;
use fleet_backend::outbound::persistence::DieselVehicleStore;

use super::ServerConfig;

/// Build the vehicle store: PostgreSQL when a pool is configured, the
/// in-process fixture store otherwise.
pub(crate) fn build_vehicle_store(config: &ServerConfig) -> Arc<dyn VehicleStore> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselVehicleStore::new(pool.clone())),
        None => Arc::new(FixtureVehicleStore::new()),
    }
}

/// Build the shared HTTP state around `store`.
pub(crate) fn build_http_state(store: Arc<dyn VehicleStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(VehicleCommandService::new(store))))
}

//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters only translate between Diesel rows and domain types; no business
//! rules live here. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use fleet_backend::outbound::persistence::{DbPool, DieselVehicleStore, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/fleet")).await?;
//! let store = DieselVehicleStore::new(pool);
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

mod diesel_vehicle_store;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_vehicle_store::DieselVehicleStore;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

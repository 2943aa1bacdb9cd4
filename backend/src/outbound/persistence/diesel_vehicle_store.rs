//! PostgreSQL-backed `VehicleStore` implementation using Diesel ORM.
//!
//! Inserts use `RETURNING` so the database-assigned id and the stored values
//! come back in a single round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{VehicleStore, VehicleStoreError};
use crate::domain::{NewVehicle, Position, Shortcode, Vehicle, VehicleId};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewVehicleRow, VehicleRow};
use super::pool::{DbPool, PoolError};
use super::schema::vehicles;

/// Diesel-backed implementation of the vehicle store port.
#[derive(Clone)]
pub struct DieselVehicleStore {
    pool: DbPool,
}

impl DieselVehicleStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> VehicleStoreError {
    map_basic_pool_error(error, VehicleStoreError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> VehicleStoreError {
    map_basic_diesel_error(
        error,
        VehicleStoreError::query,
        VehicleStoreError::connection,
    )
}

/// Convert a database row into a validated domain vehicle.
fn row_to_vehicle(row: VehicleRow) -> Result<Vehicle, VehicleStoreError> {
    let VehicleRow {
        id,
        shortcode,
        battery,
        latitude,
        longitude,
    } = row;

    let shortcode = Shortcode::new(shortcode)
        .map_err(|err| VehicleStoreError::query(format!("stored vehicle {id}: {err}")))?;

    Ok(Vehicle::new(
        VehicleId::new(id),
        shortcode,
        battery,
        Position::new(latitude, longitude),
    ))
}

#[async_trait]
impl VehicleStore for DieselVehicleStore {
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let position = vehicle.position();
        let new_row = NewVehicleRow {
            shortcode: vehicle.shortcode().as_str(),
            battery: vehicle.battery(),
            latitude: position.latitude,
            longitude: position.longitude,
        };

        let row: VehicleRow = diesel::insert_into(vehicles::table)
            .values(&new_row)
            .returning(VehicleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(vehicle_id = row.id, "vehicle row inserted");
        row_to_vehicle(row)
    }

    async fn ping(&self) -> Result<(), VehicleStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion tests; SQL round trips need a live database.

    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn row(shortcode: &str) -> VehicleRow {
        VehicleRow {
            id: 7,
            shortcode: shortcode.to_owned(),
            battery: 17.0,
            latitude: 45.0,
            longitude: -3.5,
        }
    }

    #[rstest]
    fn valid_row_converts_to_vehicle() {
        let vehicle = row_to_vehicle(row("abcd")).expect("valid row");

        assert_eq!(vehicle.id(), VehicleId::new(7));
        assert_eq!(vehicle.shortcode().as_str(), "abcd");
        assert_eq!(vehicle.battery(), 17.0);
        assert_eq!(vehicle.position(), Position::new(45.0, -3.5));
    }

    #[rstest]
    fn corrupt_shortcode_is_a_query_error() {
        let err = row_to_vehicle(row("abcde")).expect_err("invalid shortcode");

        assert!(matches!(err, VehicleStoreError::Query { .. }));
        assert!(err.to_string().contains("stored vehicle 7"));
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));

        assert_eq!(err, VehicleStoreError::connection("timed out"));
    }

    #[rstest]
    #[case::not_found(DieselError::NotFound, false)]
    #[case::rollback(DieselError::RollbackTransaction, false)]
    #[case::closed(
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("closed")),
        ),
        true
    )]
    #[case::check_violation(
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new(String::from("vehicles_shortcode_length")),
        ),
        false
    )]
    fn diesel_errors_map_by_kind(#[case] error: DieselError, #[case] is_connection: bool) {
        let err = map_diesel_error(error);

        assert_eq!(
            matches!(err, VehicleStoreError::Connection { .. }),
            is_connection
        );
    }
}

//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::vehicles;

/// Row struct for reading from the vehicles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VehicleRow {
    pub id: i64,
    pub shortcode: String,
    pub battery: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Insertable struct for creating vehicle records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = vehicles)]
pub(crate) struct NewVehicleRow<'a> {
    pub shortcode: &'a str,
    pub battery: f64,
    pub latitude: f64,
    pub longitude: f64,
}

//! Domain primitives, aggregates and services.
//!
//! Purpose: define the vehicle model and the rules guarding its creation,
//! independent of HTTP or database concerns. Adapters talk to the domain
//! through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier.
//! - Vehicle, NewVehicle, VehicleDraft, Shortcode, Position, VehicleId.
//! - VehicleCommandService: validates and creates vehicles via a store.

pub mod error;
pub mod ports;
mod trace_id;
mod vehicle;
mod vehicle_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::vehicle::{
    NewVehicle, Position, SHORTCODE_LENGTH, Shortcode, Vehicle, VehicleDraft, VehicleId,
    VehicleViolation, VehicleViolations,
};
pub use self::vehicle_service::{
    INVALID_CREATE_VEHICLE_REQUEST, VehicleCommandService, invalid_create_vehicle_request,
};

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

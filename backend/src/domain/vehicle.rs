//! Vehicle aggregate and the validation that guards its construction.
//!
//! Inbound payloads arrive as a [`VehicleDraft`] whose fields are all
//! optional. [`NewVehicle::try_from`] checks every rule and reports all
//! violations together; only a validated [`NewVehicle`] can reach a store.
//! Stores answer with a [`Vehicle`], which adds the store-assigned
//! [`VehicleId`].

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Exact number of characters in a vehicle shortcode.
pub const SHORTCODE_LENGTH: usize = 4;

/// Store-assigned vehicle identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single broken rule in a create-vehicle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleViolation {
    MissingShortcode,
    ShortcodeLength,
    MissingBattery,
    MissingLatitude,
    MissingLongitude,
}

impl fmt::Display for VehicleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingShortcode => write!(f, "Shortcode is required"),
            Self::ShortcodeLength => write!(
                f,
                "Shortcode must be exactly {SHORTCODE_LENGTH} characters long"
            ),
            Self::MissingBattery => write!(f, "Battery is required"),
            Self::MissingLatitude => write!(f, "Latitude is required"),
            Self::MissingLongitude => write!(f, "Longitude is required"),
        }
    }
}

impl std::error::Error for VehicleViolation {}

/// Every violation found while validating a [`VehicleDraft`], in field order.
///
/// ## Invariants
/// - Never empty when returned from [`NewVehicle::try_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleViolations(Vec<VehicleViolation>);

impl VehicleViolations {
    /// Borrow the individual violations.
    pub fn as_slice(&self) -> &[VehicleViolation] {
        self.0.as_slice()
    }

    /// Human-readable message for each violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for VehicleViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for VehicleViolations {}

/// Four-character vehicle shortcode.
///
/// Length is counted in Unicode scalar values, so `"éèêë"` is a valid
/// shortcode even though it is eight bytes of UTF-8.
///
/// # Examples
/// ```
/// use fleet_backend::domain::Shortcode;
///
/// assert!(Shortcode::new("abcd").is_ok());
/// assert!(Shortcode::new("abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcode(String);

impl Shortcode {
    /// Validate and wrap a shortcode.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleViolation> {
        let value = value.into();
        if value.chars().count() != SHORTCODE_LENGTH {
            return Err(VehicleViolation::ShortcodeLength);
        }
        Ok(Self(value))
    }

    /// Borrow the shortcode text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for Shortcode {
    type Error = VehicleViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Shortcode> for String {
    fn from(value: Shortcode) -> Self {
        value.0
    }
}

impl AsRef<str> for Shortcode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic position of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    #[schema(example = 45.0)]
    pub latitude: f64,
    #[schema(example = 45.0)]
    pub longitude: f64,
}

impl Position {
    /// Build a position from its coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Unvalidated create-vehicle input, as extracted from a request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub shortcode: Option<String>,
    pub battery: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Validated vehicle awaiting an identity from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    shortcode: Shortcode,
    battery: f64,
    position: Position,
}

impl NewVehicle {
    /// Assemble a new vehicle from already validated parts.
    pub fn new(shortcode: Shortcode, battery: f64, position: Position) -> Self {
        Self {
            shortcode,
            battery,
            position,
        }
    }

    /// Vehicle shortcode.
    pub fn shortcode(&self) -> &Shortcode {
        &self.shortcode
    }

    /// Battery level.
    pub fn battery(&self) -> f64 {
        self.battery
    }

    /// Reported position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Attach the identity assigned by a store.
    pub fn into_vehicle(self, id: VehicleId) -> Vehicle {
        Vehicle {
            id,
            shortcode: self.shortcode,
            battery: self.battery,
            position: self.position,
        }
    }
}

impl TryFrom<VehicleDraft> for NewVehicle {
    type Error = VehicleViolations;

    fn try_from(value: VehicleDraft) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let shortcode = match value.shortcode {
            Some(raw) => Shortcode::new(raw)
                .map_err(|violation| violations.push(violation))
                .ok(),
            None => {
                violations.push(VehicleViolation::MissingShortcode);
                None
            }
        };
        let battery = require(value.battery, VehicleViolation::MissingBattery, &mut violations);
        let latitude = require(
            value.latitude,
            VehicleViolation::MissingLatitude,
            &mut violations,
        );
        let longitude = require(
            value.longitude,
            VehicleViolation::MissingLongitude,
            &mut violations,
        );

        match (shortcode, battery, latitude, longitude) {
            (Some(shortcode), Some(battery), Some(latitude), Some(longitude)) => Ok(Self::new(
                shortcode,
                battery,
                Position::new(latitude, longitude),
            )),
            _ => Err(VehicleViolations(violations)),
        }
    }
}

fn require<T>(
    value: Option<T>,
    violation: VehicleViolation,
    violations: &mut Vec<VehicleViolation>,
) -> Option<T> {
    if value.is_none() {
        violations.push(violation);
    }
    value
}

/// A persisted vehicle.
///
/// Serialises as
/// `{"id":12,"shortcode":"abcd","battery":17.0,"position":{"latitude":45.0,"longitude":45.0}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    #[schema(example = 12)]
    id: VehicleId,
    #[schema(example = "abcd")]
    shortcode: Shortcode,
    #[schema(example = 17.0)]
    battery: f64,
    position: Position,
}

impl Vehicle {
    /// Assemble a vehicle from validated parts.
    pub fn new(id: VehicleId, shortcode: Shortcode, battery: f64, position: Position) -> Self {
        Self {
            id,
            shortcode,
            battery,
            position,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Vehicle shortcode.
    pub fn shortcode(&self) -> &Shortcode {
        &self.shortcode
    }

    /// Battery level.
    pub fn battery(&self) -> f64 {
        self.battery
    }

    /// Last reported position.
    pub fn position(&self) -> Position {
        self.position
    }
}

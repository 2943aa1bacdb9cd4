//! Tests for the vehicle command service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{FixtureVehicleStore, MockVehicleStore};
use crate::domain::{ErrorCode, Shortcode, VehicleDraft, VehicleId};

#[fixture]
fn valid_request() -> CreateVehicleRequest {
    CreateVehicleRequest {
        vehicle: VehicleDraft {
            shortcode: Some("abcd".to_owned()),
            battery: Some(17.0),
            longitude: Some(45.0),
            latitude: Some(45.0),
        },
    }
}

fn store_assigning_id(id: i64) -> MockVehicleStore {
    let mut store = MockVehicleStore::new();
    store
        .expect_create_vehicle()
        .times(1)
        .returning(move |vehicle| Ok(vehicle.clone().into_vehicle(VehicleId::new(id))));
    store
}

fn store_never_called() -> MockVehicleStore {
    let mut store = MockVehicleStore::new();
    store.expect_create_vehicle().times(0);
    store
}

#[rstest]
#[tokio::test]
async fn creates_a_valid_vehicle(valid_request: CreateVehicleRequest) {
    let service = VehicleCommandService::new(Arc::new(store_assigning_id(12)));

    let response = service
        .create_vehicle(valid_request)
        .await
        .expect("create succeeds");

    let vehicle = response.vehicle;
    assert_eq!(vehicle.id(), VehicleId::new(12));
    assert_eq!(vehicle.shortcode().as_str(), "abcd");
    assert_eq!(vehicle.battery(), 17.0);
    assert_eq!(vehicle.position().latitude, 45.0);
    assert_eq!(vehicle.position().longitude, 45.0);
}

#[rstest]
#[tokio::test]
async fn passes_validated_fields_to_the_store(valid_request: CreateVehicleRequest) {
    let mut store = MockVehicleStore::new();
    store
        .expect_create_vehicle()
        .withf(|vehicle| {
            vehicle.shortcode() == &Shortcode::new("abcd").expect("valid shortcode")
                && vehicle.battery() == 17.0
                && vehicle.position().latitude == 45.0
                && vehicle.position().longitude == 45.0
        })
        .times(1)
        .returning(|vehicle| Ok(vehicle.clone().into_vehicle(VehicleId::new(1))));
    let service = VehicleCommandService::new(Arc::new(store));

    service
        .create_vehicle(valid_request)
        .await
        .expect("create succeeds");
}

#[rstest]
#[tokio::test]
async fn rejects_invalid_shortcode_without_calling_the_store(
    mut valid_request: CreateVehicleRequest,
) {
    valid_request.vehicle.shortcode = Some("abc".to_owned());
    let service = VehicleCommandService::new(Arc::new(store_never_called()));

    let error = service
        .create_vehicle(valid_request)
        .await
        .expect_err("shortcode is invalid");

    assert_eq!(error.code(), ErrorCode::BadRequest);
    assert_eq!(error.message(), "Invalid create vehicle request");
    assert!(
        error
            .violations()
            .contains(&"Shortcode must be exactly 4 characters long")
    );
}

#[rstest]
#[tokio::test]
async fn reports_every_violation_at_once() {
    let service = VehicleCommandService::new(Arc::new(store_never_called()));
    let request = CreateVehicleRequest {
        vehicle: VehicleDraft {
            shortcode: Some("abcdef".to_owned()),
            battery: None,
            latitude: Some(1.0),
            longitude: None,
        },
    };

    let error = service
        .create_vehicle(request)
        .await
        .expect_err("request is invalid");

    assert_eq!(
        error.violations(),
        vec![
            "Shortcode must be exactly 4 characters long",
            "Battery is required",
            "Longitude is required",
        ]
    );
}

#[rstest]
#[case(VehicleStoreError::connection("pool exhausted"), ErrorCode::ServiceUnavailable)]
#[case(VehicleStoreError::query("constraint violated"), ErrorCode::InternalError)]
#[tokio::test]
async fn maps_store_failures(
    valid_request: CreateVehicleRequest,
    #[case] store_error: VehicleStoreError,
    #[case] expected: ErrorCode,
) {
    let mut store = MockVehicleStore::new();
    store
        .expect_create_vehicle()
        .times(1)
        .return_once(move |_| Err(store_error));
    let service = VehicleCommandService::new(Arc::new(store));

    let error = service
        .create_vehicle(valid_request)
        .await
        .expect_err("store failure propagates");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn identical_requests_create_distinct_vehicles(valid_request: CreateVehicleRequest) {
    let service = VehicleCommandService::new(Arc::new(FixtureVehicleStore::new()));

    let first = service
        .create_vehicle(valid_request.clone())
        .await
        .expect("first create succeeds");
    let second = service
        .create_vehicle(valid_request)
        .await
        .expect("second create succeeds");

    assert_ne!(first.vehicle.id(), second.vehicle.id());
}

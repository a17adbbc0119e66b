use crate::client::api::trips::trip_from_envelope;
use crate::client::api::ApiError;
use crate::model::api::ErrorDto;
use crate::model::trip::{TripEnvelopeDto, TripListDto};

/// Expect a full payload to decode into the trip record
#[test]
fn envelope_with_trip_is_ready() {
    let envelope: TripEnvelopeDto = serde_json::from_str(
        r#"{
            "trip": {
                "id": 7,
                "title": "Spring in Lisbon",
                "destination": "Lisbon, Portugal",
                "start_date": "2024-03-01",
                "end_date": "2024-03-03"
            }
        }"#,
    )
    .unwrap();

    let trip = trip_from_envelope(envelope).unwrap();
    assert_eq!(trip.id, 7);
    assert_eq!(trip.start_date.to_string(), "2024-03-01");
    assert_eq!(trip.end_date.to_string(), "2024-03-03");
}

/// Expect an empty 2xx payload to drive the caller to not-found, not ready
#[test]
fn envelope_without_trip_is_not_found() {
    let envelope: TripEnvelopeDto = serde_json::from_str("{}").unwrap();

    assert_eq!(trip_from_envelope(envelope), Err(ApiError::NotFound));
}

/// Expect a missing trips key to decode as absent rather than failing
#[test]
fn trip_list_tolerates_missing_key() {
    let list: TripListDto = serde_json::from_str("{}").unwrap();
    assert!(list.trips.is_none());

    let list: TripListDto = serde_json::from_str(r#"{"trips": []}"#).unwrap();
    assert_eq!(list.trips.map(|trips| trips.len()), Some(0));
}

/// Expect the error envelope to yield whichever message key is present
#[test]
fn error_envelope_prefers_error_key() {
    let envelope: ErrorDto =
        serde_json::from_str(r#"{"error": "boom", "message": "ignored"}"#).unwrap();
    assert_eq!(envelope.into_message().as_deref(), Some("boom"));

    let envelope: ErrorDto = serde_json::from_str(r#"{"message": "fallback"}"#).unwrap();
    assert_eq!(envelope.into_message().as_deref(), Some("fallback"));

    let envelope: ErrorDto = serde_json::from_str("{}").unwrap();
    assert_eq!(envelope.into_message(), None);
}

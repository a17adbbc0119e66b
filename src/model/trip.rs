use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A trip record as owned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripDto {
    pub id: i64,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The writable trip fields sent when creating or updating a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripDataDto {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response wrapper for single-trip endpoints.
///
/// A 2xx response without the `trip` key is possible and must be treated as
/// the trip not existing rather than as a decode failure.
#[derive(Deserialize)]
pub struct TripEnvelopeDto {
    #[serde(default)]
    pub trip: Option<TripDto>,
}

/// Response wrapper for the trip collection endpoint.
#[derive(Deserialize)]
pub struct TripListDto {
    #[serde(default)]
    pub trips: Option<Vec<TripDto>>,
}

use crate::model::trip::{TripDataDto, TripDto, TripEnvelopeDto, TripListDto};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Retrieve every trip belonging to the current user.
    pub async fn fetch_trips(&self) -> Result<Vec<TripDto>, ApiError> {
        let list: TripListDto = self.get_json("/api/trips").await?;
        list.trips
            .ok_or_else(|| ApiError::InvalidResponse("response is missing the trips field".to_string()))
    }

    /// Retrieve one trip by id.
    pub async fn fetch_trip(&self, trip_id: i64) -> Result<TripDto, ApiError> {
        let envelope: TripEnvelopeDto = self.get_json(&format!("/api/trips/{trip_id}")).await?;
        trip_from_envelope(envelope)
    }

    /// Create a trip, returning the server-assigned record.
    pub async fn create_trip(&self, data: &TripDataDto) -> Result<TripDto, ApiError> {
        let envelope: TripEnvelopeDto = self.post_json("/api/trips", data).await?;
        trip_from_envelope(envelope)
    }

    /// Update a trip's core fields.
    pub async fn update_trip(&self, trip_id: i64, data: &TripDataDto) -> Result<TripDto, ApiError> {
        let envelope: TripEnvelopeDto = self
            .put_json(&format!("/api/trips/{trip_id}"), data)
            .await?;
        trip_from_envelope(envelope)
    }

    /// Delete a trip.
    pub async fn delete_trip(&self, trip_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/trips/{trip_id}")).await
    }
}

/// A 2xx payload without a `trip` record drives the caller to the not-found
/// state, not to a decode failure.
pub(crate) fn trip_from_envelope(envelope: TripEnvelopeDto) -> Result<TripDto, ApiError> {
    envelope.trip.ok_or(ApiError::NotFound)
}

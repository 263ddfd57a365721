//! JSON shapes exchanged with the propagation service.

use orbit_core::{TrajectoryPoint, TrajectoryResult};
use serde::Deserialize;

use crate::error::ServiceError;

/// Success body: `{ "period_seconds": number, "positions": [{x, y, z}, ...] }`.
#[derive(Debug, Deserialize)]
pub struct OrbitResponse {
    pub period_seconds: f64,
    pub positions: Vec<TrajectoryPoint>,
}

impl TryFrom<OrbitResponse> for TrajectoryResult {
    type Error = ServiceError;

    fn try_from(value: OrbitResponse) -> Result<Self, Self::Error> {
        TrajectoryResult::new(value.period_seconds, value.positions)
            .map_err(|err| ServiceError::Decode(err.to_string()))
    }
}

/// Health endpoint body: `{ "message": string }`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Decode a success body into a trajectory.
pub fn decode_response(bytes: &[u8]) -> Result<TrajectoryResult, ServiceError> {
    let response: OrbitResponse =
        serde_json::from_slice(bytes).map_err(|err| ServiceError::Decode(err.to_string()))?;
    response.try_into()
}

//! Trajectory samples returned by the remote propagator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vector::Vector3;

/// Cartesian position relative to the orbited body's centre (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryPoint {
    /// The orbited body's centre.
    pub const ORIGIN: TrajectoryPoint = TrajectoryPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_vector(&self) -> Vector3 {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Reasons a decoded trajectory is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("period_seconds must be a positive number, got {0}")]
    InvalidPeriod(f64),
    #[error("position {index} has a non-finite coordinate")]
    NonFinitePosition { index: usize },
}

/// Ordered positions sampled over one period.
///
/// Order is propagation time order and is never rearranged after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    period_seconds: f64,
    positions: Vec<TrajectoryPoint>,
}

impl TrajectoryResult {
    pub fn new(
        period_seconds: f64,
        positions: Vec<TrajectoryPoint>,
    ) -> Result<Self, TrajectoryError> {
        if !(period_seconds.is_finite() && period_seconds > 0.0) {
            return Err(TrajectoryError::InvalidPeriod(period_seconds));
        }
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(TrajectoryError::NonFinitePosition { index });
        }
        Ok(Self {
            period_seconds,
            positions,
        })
    }

    pub fn period_seconds(&self) -> f64 {
        self.period_seconds
    }

    pub fn positions(&self) -> &[TrajectoryPoint] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

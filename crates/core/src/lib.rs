//! Core units, constants, and shared primitives for the orbit visualizer workspace.

pub mod trajectory;

pub use trajectory::{TrajectoryError, TrajectoryPoint, TrajectoryResult};

/// Physical and practical constants, kilometres and seconds unless stated otherwise.
pub mod constants {
    /// Earth equatorial radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_378.137;
    /// Lowest semi-major axis accepted for a closed Earth orbit (km), ~400 km altitude.
    pub const MIN_SEMI_MAJOR_AXIS_KM: f64 = 6_778.0;
    /// Geostationary orbit radius (km); upper bound for editable semi-major axes.
    pub const GEO_SEMI_MAJOR_AXIS_KM: f64 = 42_164.0;
    /// Eccentricity ceiling; anything at or above this is rejected.
    pub const MAX_ECCENTRICITY: f64 = 0.9;
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::SECONDS_PER_MINUTE;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / SECONDS_PER_MINUTE
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in kilometres.
    pub type Vector3 = [f64; 3];

    /// Largest absolute component.
    #[inline]
    pub fn max_abs(v: &Vector3) -> f64 {
        v[0].abs().max(v[1].abs()).max(v[2].abs())
    }
}

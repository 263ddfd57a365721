//! Element identifiers, units, and valid ranges.

use std::fmt;
use std::str::FromStr;

use orbit_core::constants::{GEO_SEMI_MAJOR_AXIS_KM, MAX_ECCENTRICITY, MIN_SEMI_MAJOR_AXIS_KM};
use thiserror::Error;

/// One of the six editable orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    SemiMajorAxis,
    Eccentricity,
    Inclination,
    /// Right ascension of the ascending node.
    Raan,
    /// Argument of perigee.
    Argp,
    TrueAnomaly,
}

impl ParameterField {
    /// All fields in wire order.
    pub const ALL: [ParameterField; 6] = [
        Self::SemiMajorAxis,
        Self::Eccentricity,
        Self::Inclination,
        Self::Raan,
        Self::Argp,
        Self::TrueAnomaly,
    ];

    /// Name used on the wire and in commands.
    pub fn name(self) -> &'static str {
        match self {
            Self::SemiMajorAxis => "semi_major_axis",
            Self::Eccentricity => "eccentricity",
            Self::Inclination => "inclination",
            Self::Raan => "raan",
            Self::Argp => "argp",
            Self::TrueAnomaly => "true_anomaly",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::SemiMajorAxis => "km",
            Self::Eccentricity => "",
            _ => "deg",
        }
    }

    pub fn range(self) -> ParameterRange {
        match self {
            Self::SemiMajorAxis => {
                ParameterRange::closed(MIN_SEMI_MAJOR_AXIS_KM, GEO_SEMI_MAJOR_AXIS_KM)
            }
            Self::Eccentricity => ParameterRange::half_open(0.0, MAX_ECCENTRICITY),
            Self::Inclination => ParameterRange::closed(0.0, 180.0),
            Self::Raan | Self::Argp | Self::TrueAnomaly => ParameterRange::half_open(0.0, 360.0),
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown orbital parameter '{0}'")]
pub struct FieldParseError(pub String);

impl FromStr for ParameterField {
    type Err = FieldParseError;

    /// Accepts wire names case-insensitively, with `-` standing in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// Inclusive lower bound, inclusive or exclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub max_inclusive: bool,
}

impl ParameterRange {
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: true,
        }
    }

    pub const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            max_inclusive: false,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min {
            return false;
        }
        if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        }
    }
}

impl fmt::Display for ParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.min, self.max, close)
    }
}

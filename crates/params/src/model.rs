//! Parameter snapshot and the single-writer model that owns the live copy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{ParameterField, ParameterRange};

/// The six classical elements sent to the remote propagator.
///
/// Field names are the wire names; units are km and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub raan: f64,
    pub argp: f64,
    pub true_anomaly: f64,
}

impl Default for OrbitalParameters {
    /// Near-circular low Earth orbit at 45° inclination.
    fn default() -> Self {
        Self {
            semi_major_axis: 7_000.0,
            eccentricity: 0.01,
            inclination: 45.0,
            raan: 10.0,
            argp: 20.0,
            true_anomaly: 0.0,
        }
    }
}

/// Rejected parameter update. The prior snapshot is never touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: not a number ({raw:?})")]
    NotANumber { field: ParameterField, raw: String },
    #[error("{field}: out of range, {value} is outside {bound}")]
    OutOfRange {
        field: ParameterField,
        value: f64,
        bound: ParameterRange,
    },
}

impl ValidationError {
    pub fn field(&self) -> ParameterField {
        match self {
            Self::NotANumber { field, .. } | Self::OutOfRange { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotANumber { .. } => "not a number",
            Self::OutOfRange { .. } => "out of range",
        }
    }

    /// Violated bound for range failures.
    pub fn bound(&self) -> Option<ParameterRange> {
        match self {
            Self::OutOfRange { bound, .. } => Some(*bound),
            Self::NotANumber { .. } => None,
        }
    }
}

impl OrbitalParameters {
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::SemiMajorAxis => self.semi_major_axis,
            ParameterField::Eccentricity => self.eccentricity,
            ParameterField::Inclination => self.inclination,
            ParameterField::Raan => self.raan,
            ParameterField::Argp => self.argp,
            ParameterField::TrueAnomaly => self.true_anomaly,
        }
    }

    fn slot(&mut self, field: ParameterField) -> &mut f64 {
        match field {
            ParameterField::SemiMajorAxis => &mut self.semi_major_axis,
            ParameterField::Eccentricity => &mut self.eccentricity,
            ParameterField::Inclination => &mut self.inclination,
            ParameterField::Raan => &mut self.raan,
            ParameterField::Argp => &mut self.argp,
            ParameterField::TrueAnomaly => &mut self.true_anomaly,
        }
    }

    /// Copy with `field` set to `value`, after range checking.
    pub fn with_value(&self, field: ParameterField, value: f64) -> Result<Self, ValidationError> {
        check(field, value)?;
        let mut next = *self;
        *next.slot(field) = value;
        Ok(next)
    }

    /// Copy with `field` set from user text. Non-finite input counts as not a number.
    pub fn with_raw(&self, field: ParameterField, raw: &str) -> Result<Self, ValidationError> {
        let value = parse_value(field, raw)?;
        self.with_value(field, value)
    }

    /// Check every element against its range, reporting the first violation in wire order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ParameterField::ALL
            .into_iter()
            .try_for_each(|field| check(field, self.get(field)))
    }
}

fn parse_value(field: ParameterField, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn check(field: ParameterField, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            raw: value.to_string(),
        });
    }
    let bound = field.range();
    if bound.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            bound,
        })
    }
}

/// Owns the live parameter snapshot for one session.
#[derive(Debug, Clone, Default)]
pub struct ParameterModel {
    current: OrbitalParameters,
}

impl ParameterModel {
    /// Start from a validated snapshot.
    pub fn new(initial: OrbitalParameters) -> Result<Self, ValidationError> {
        initial.validate()?;
        Ok(Self { current: initial })
    }

    pub fn get(&self) -> OrbitalParameters {
        self.current
    }

    /// Parse and range-check `raw` for `field`. On success the stored snapshot is
    /// replaced and returned; on failure nothing changes.
    pub fn update(
        &mut self,
        field: ParameterField,
        raw: &str,
    ) -> Result<OrbitalParameters, ValidationError> {
        let next = self.current.with_raw(field, raw)?;
        self.current = next;
        Ok(next)
    }
}

//! Orbital parameter model: six range-constrained elements and their update contract.

pub mod field;
pub mod model;

pub use field::{FieldParseError, ParameterField, ParameterRange};
pub use model::{OrbitalParameters, ParameterModel, ValidationError};

use thiserror::Error;

use crate::Scalar;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    #[error("Box dimension {axis} must be positive and finite, got {value}")]
    InvalidDimension { axis: char, value: Scalar },

    #[error("Unknown particle category '{label}'")]
    InvalidCategory { label: String },

    #[error("Speed sampling degenerated: maximum sampled speed was {max}")]
    DegenerateSampling { max: Scalar },

    #[error("Invalid value {value} for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: Scalar },

    #[error("Cannot mix inert and reactive particles in one state")]
    SpeciesMismatch,

    #[error("Particle column '{column}' has {found} entries, expected {expected}")]
    ColumnMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, GasError>;

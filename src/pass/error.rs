use std::fmt;

use thiserror::Error;

/// Which length an infeasible minimum was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    /// Pre-flight check against `max_length`.
    Maximum,
    /// Per-call check against the randomly chosen length.
    Chosen,
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::Maximum => f.write_str("maximum length"),
            LengthBound::Chosen => f.write_str("chosen length"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid length range: minimum {min}, maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("minimum counts cannot be negative (numbers: {numbers}, special: {special})")]
    InvalidMinimum { numbers: i64, special: i64 },

    #[error(
        "minimum number and special character requirements ({required}) exceed the {bound} ({available})"
    )]
    InfeasibleMinimums {
        required: u64,
        available: u64,
        bound: LengthBound,
    },

    #[error("cannot allocate a string of {length} characters")]
    LengthTooLarge { length: u64 },
}

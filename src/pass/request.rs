//! Generation request and its validation.

use super::{GenerateError, LengthBound};

/// Configuration for one `generate` call.
///
/// Counts are signed so that front ends can pass user input straight
/// through and get a typed error back for negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub min_length: i64,
    pub max_length: i64,
    pub min_numbers: i64,
    pub min_special: i64,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub allow_ambiguous: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            min_length: 16,
            max_length: 16,
            min_numbers: 0,
            min_special: 0,
            include_lower: true,
            include_upper: true,
            include_numbers: true,
            include_special: true,
            allow_ambiguous: false,
        }
    }
}

impl GenerationRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        min_length: i64,
        max_length: i64,
        min_numbers: i64,
        min_special: i64,
        include_lower: bool,
        include_upper: bool,
        include_numbers: bool,
        include_special: bool,
        allow_ambiguous: bool,
    ) -> Self {
        Self {
            min_length,
            max_length,
            min_numbers,
            min_special,
            include_lower,
            include_upper,
            include_numbers,
            include_special,
            allow_ambiguous,
        }
    }

    /// Fixed length: sets both bounds.
    pub fn length(self, length: i64) -> Self {
        self.lengths(length, length)
    }

    pub fn lengths(mut self, min: i64, max: i64) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn minimums(mut self, numbers: i64, special: i64) -> Self {
        self.min_numbers = numbers;
        self.min_special = special;
        self
    }

    pub fn lower(mut self, on: bool) -> Self {
        self.include_lower = on;
        self
    }

    pub fn upper(mut self, on: bool) -> Self {
        self.include_upper = on;
        self
    }

    pub fn numbers(mut self, on: bool) -> Self {
        self.include_numbers = on;
        self
    }

    pub fn special(mut self, on: bool) -> Self {
        self.include_special = on;
        self
    }

    pub fn ambiguous(mut self, allow: bool) -> Self {
        self.allow_ambiguous = allow;
        self
    }

    /// Checks bounds and minimums, including the pre-flight feasibility
    /// check against `max_length`.
    pub fn validate(&self) -> Result<Bounds, GenerateError> {
        let range_err = GenerateError::InvalidRange {
            min: self.min_length,
            max: self.max_length,
        };

        if self.min_length < 0 || self.max_length < self.min_length {
            return Err(range_err);
        }

        if self.min_numbers < 0 || self.min_special < 0 {
            return Err(GenerateError::InvalidMinimum {
                numbers: self.min_numbers,
                special: self.min_special,
            });
        }

        // Both are non-negative i64, so the sum fits in u64
        let required = self.min_numbers as u64 + self.min_special as u64;
        if required > self.max_length as u64 {
            return Err(GenerateError::InfeasibleMinimums {
                required,
                available: self.max_length as u64,
                bound: LengthBound::Maximum,
            });
        }

        // Minimums are bounded by max_length now; only it can overflow usize
        let max_length = usize::try_from(self.max_length).map_err(|_| range_err)?;

        Ok(Bounds {
            min_length: self.min_length as usize,
            max_length,
            min_numbers: self.min_numbers as usize,
            min_special: self.min_special as usize,
        })
    }
}

/// Validated, unsigned view of a request's numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_length: usize,
    pub max_length: usize,
    pub min_numbers: usize,
    pub min_special: usize,
}

impl Bounds {
    pub fn required(&self) -> usize {
        self.min_numbers + self.min_special
    }
}

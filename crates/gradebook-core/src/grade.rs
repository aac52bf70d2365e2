//! The validated grade value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, InvalidGradeReason};

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 100.0;

/// A numeric score in `[0, 100]`.
///
/// The only way to obtain a `Grade` is through validation, so a record
/// holding `Vec<Grade>` can never contain an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    /// Validate a raw number as a grade.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        if value.is_nan() {
            return Err(GradeError::InvalidGrade {
                value: value.to_string(),
                reason: InvalidGradeReason::NotANumber,
            });
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradeError::InvalidGrade {
                value: value.to_string(),
                reason: InvalidGradeReason::OutOfRange,
            });
        }
        Ok(Self(value))
    }

    /// The underlying number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| GradeError::InvalidGrade {
            value: trimmed.to_string(),
            reason: InvalidGradeReason::NotANumber,
        })?;
        // Keep the caller's spelling in the message ("-5", not "-5.0").
        Grade::new(value).map_err(|err| match err {
            GradeError::InvalidGrade { reason, .. } => GradeError::InvalidGrade {
                value: trimmed.to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl fmt::Display for Grade {
    /// Shortest round-trip form with a trailing `.0` for whole numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

//! Derivation rules: average, letter grade, status and honor roll.
//!
//! Everything here is a pure function of the grade sequence. A record keeps
//! the result as one [`Summary`] and replaces it wholesale after a mutation.

use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::model::{LetterGrade, Status};

/// Minimum average for the honor roll.
pub const HONOR_ROLL_THRESHOLD: f64 = 90.0;
/// Minimum average to pass.
pub const PASSING_THRESHOLD: f64 = 60.0;

/// Letter bands, highest first. Each lower bound is inclusive.
pub const LETTER_BANDS: [(f64, LetterGrade); 4] = [
    (90.0, LetterGrade::A),
    (80.0, LetterGrade::B),
    (70.0, LetterGrade::C),
    (60.0, LetterGrade::D),
];

/// Arithmetic mean, or `0.0` for an empty sequence.
pub fn average(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().map(|g| g.value()).sum::<f64>() / grades.len() as f64
}

/// Map an average onto its letter band.
pub fn letter_for(average: f64) -> LetterGrade {
    LETTER_BANDS
        .iter()
        .find(|(lower, _)| average >= *lower)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

pub fn status_for(average: f64) -> Status {
    if average >= PASSING_THRESHOLD {
        Status::Passed
    } else {
        Status::Failed
    }
}

pub fn honor_roll_for(average: f64) -> bool {
    average >= HONOR_ROLL_THRESHOLD
}

/// The four derived fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Arithmetic mean of the grades.
    pub average: f64,
    /// Letter band of the average.
    pub letter_grade: LetterGrade,
    /// Pass/fail classification.
    pub status: Status,
    /// Whether the average reaches the honor roll.
    pub honor_roll: bool,
}

impl Summary {
    /// The state of a record that has never been mutated.
    pub fn unset() -> Self {
        Self {
            average: 0.0,
            letter_grade: LetterGrade::Unset,
            status: Status::Ungraded,
            honor_roll: false,
        }
    }

    /// Derive all fields from the current grades.
    ///
    /// An empty sequence yields an average of 0, which classifies as `F` and
    /// failed. Only [`Summary::unset`] produces the ungraded sentinel.
    pub fn compute(grades: &[Grade]) -> Self {
        let average = average(grades);
        Self {
            average,
            letter_grade: letter_for(average),
            status: status_for(average),
            honor_roll: honor_roll_for(average),
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::unset()
    }
}

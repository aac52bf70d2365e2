//! Categorical types derived from a record's average.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
    /// No letter has been derived yet (freshly constructed record).
    #[serde(rename = "unset")]
    Unset,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterGrade::A => write!(f, "A"),
            LetterGrade::B => write!(f, "B"),
            LetterGrade::C => write!(f, "C"),
            LetterGrade::D => write!(f, "D"),
            LetterGrade::F => write!(f, "F"),
            LetterGrade::Unset => write!(f, "N/A"),
        }
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" => Ok(LetterGrade::A),
            "b" => Ok(LetterGrade::B),
            "c" => Ok(LetterGrade::C),
            "d" => Ok(LetterGrade::D),
            "f" => Ok(LetterGrade::F),
            "unset" | "n/a" => Ok(LetterGrade::Unset),
            other => Err(format!("unknown letter grade: {other}")),
        }
    }
}

/// Pass/fail classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    /// Construction-time sentinel; never produced by derivation.
    Ungraded,
}

impl Status {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Ungraded => "ungraded",
        }
    }

    /// Label used in the student report.
    pub fn report_label(&self) -> &'static str {
        match self {
            Status::Passed => "Aprobado",
            Status::Failed => "Reprobado",
            Status::Ungraded => "No calificado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passed" | "aprobado" => Ok(Status::Passed),
            "failed" | "reprobado" => Ok(Status::Failed),
            "ungraded" | "no calificado" => Ok(Status::Ungraded),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_display_and_parse() {
        assert_eq!(LetterGrade::A.to_string(), "A");
        assert_eq!(LetterGrade::Unset.to_string(), "N/A");
        assert_eq!("b".parse::<LetterGrade>().unwrap(), LetterGrade::B);
        assert_eq!("N/A".parse::<LetterGrade>().unwrap(), LetterGrade::Unset);
        assert!("E".parse::<LetterGrade>().is_err());
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::Passed.to_string(), "passed");
        assert_eq!(Status::Failed.report_label(), "Reprobado");
        assert_eq!(Status::Ungraded.report_label(), "No calificado");
        assert_eq!("Aprobado".parse::<Status>().unwrap(), Status::Passed);
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&LetterGrade::Unset).unwrap(), "\"unset\"");
        assert_eq!(serde_json::to_string(&LetterGrade::C).unwrap(), "\"C\"");
        assert_eq!(serde_json::to_string(&Status::Ungraded).unwrap(), "\"ungraded\"");
        let status: Status = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, Status::Failed);
    }
}

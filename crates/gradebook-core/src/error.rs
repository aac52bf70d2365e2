//! Grade record error types.
//!
//! Construction failures are the only hard errors. Every failure raised
//! while mutating a record is recoverable: the record is left untouched and
//! the caller decides how to report it.
//!
//! Messages are written in the same locale as the student report, since the
//! CLI prints them next to it.

use thiserror::Error;

/// Why a candidate grade was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGradeReason {
    /// The input could not be read as a number.
    #[error("no es un número válido")]
    NotANumber,

    /// The input is a number outside `[0, 100]`.
    #[error("está fuera del rango permitido (0–100)")]
    OutOfRange,
}

/// Errors that can occur when building or mutating a grade record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// The record identity was empty at construction time.
    #[error("El ID y el nombre del estudiante no pueden estar vacíos ({field} vacío).")]
    InvalidArgument { field: &'static str },

    /// A candidate grade was non-numeric or out of range.
    #[error("{value} {reason}.")]
    InvalidGrade {
        value: String,
        reason: InvalidGradeReason,
    },

    /// `remove_by_index` was given a position past the end.
    #[error("índice {index} fuera de rango.")]
    IndexOutOfRange { index: usize, len: usize },

    /// `remove_by_value` found no matching grade.
    #[error("la calificación {0} no se encuentra en la lista.")]
    ValueNotFound(f64),

    /// An operation token could not be parsed.
    #[error("operación inválida: {0}")]
    InvalidOperation(String),
}

impl GradeError {
    /// Returns `true` if the failure left the record usable and the calling
    /// sequence of operations should carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GradeError::InvalidGrade { .. }
                | GradeError::IndexOutOfRange { .. }
                | GradeError::ValueNotFound(_)
        )
    }

    /// Returns the rejection reason for invalid grades, if applicable.
    pub fn invalid_grade_reason(&self) -> Option<InvalidGradeReason> {
        match self {
            GradeError::InvalidGrade { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_errors_are_recoverable() {
        assert!(GradeError::ValueNotFound(50.0).is_recoverable());
        assert!(GradeError::IndexOutOfRange { index: 3, len: 2 }.is_recoverable());
        assert!(GradeError::InvalidGrade {
            value: "-5".into(),
            reason: InvalidGradeReason::OutOfRange,
        }
        .is_recoverable());
    }

    #[test]
    fn construction_errors_are_not_recoverable() {
        assert!(!GradeError::InvalidArgument { field: "id" }.is_recoverable());
        assert!(!GradeError::InvalidOperation("bogus".into()).is_recoverable());
    }

    #[test]
    fn messages_match_console_wording() {
        let err = GradeError::InvalidGrade {
            value: "-5".into(),
            reason: InvalidGradeReason::OutOfRange,
        };
        assert_eq!(err.to_string(), "-5 está fuera del rango permitido (0–100).");

        let err = GradeError::InvalidGrade {
            value: "A+".into(),
            reason: InvalidGradeReason::NotANumber,
        };
        assert_eq!(err.to_string(), "A+ no es un número válido.");

        assert_eq!(
            GradeError::ValueNotFound(50.0).to_string(),
            "la calificación 50 no se encuentra en la lista."
        );
        assert_eq!(
            GradeError::IndexOutOfRange { index: 7, len: 2 }.to_string(),
            "índice 7 fuera de rango."
        );
    }
}

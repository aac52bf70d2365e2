//! Console-facing descriptions of what an operation did.

use std::fmt;

use crate::error::GradeError;
use crate::grade::Grade;
use crate::parser::Operation;

/// A mutation that went through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    Added(Grade),
    RemovedAt { index: usize, grade: Grade },
    Removed(Grade),
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applied::Added(grade) => write!(f, "Calificación {grade} agregada."),
            Applied::RemovedAt { index, grade } => {
                write!(f, "Calificación {grade} eliminada en el índice {index}.")
            }
            Applied::Removed(grade) => write!(f, "Calificación {grade} eliminada."),
        }
    }
}

/// One operation paired with what happened when it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub result: Result<Applied, GradeError>,
}

impl OperationOutcome {
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(applied) => write!(f, "{applied}"),
            Err(err) => write!(f, "Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_messages() {
        let grade = Grade::new(76.0).unwrap();
        assert_eq!(Applied::Added(grade).to_string(), "Calificación 76.0 agregada.");
        assert_eq!(
            Applied::RemovedAt { index: 2, grade }.to_string(),
            "Calificación 76.0 eliminada en el índice 2."
        );
        assert_eq!(Applied::Removed(grade).to_string(), "Calificación 76.0 eliminada.");
    }

    #[test]
    fn rejected_outcome_is_prefixed() {
        let outcome = OperationOutcome {
            operation: Operation::RemoveValue(50.0),
            result: Err(GradeError::ValueNotFound(50.0)),
        };
        assert!(outcome.is_rejected());
        assert_eq!(
            outcome.to_string(),
            "Error: la calificación 50 no se encuentra en la lista."
        );
    }
}

//! Operation script parser.
//!
//! Turns tokens such as `add=95`, `remove-index=2` and `remove-value=50` into
//! [`Operation`]s and replays them against a record in order.

use std::fmt;
use std::str::FromStr;

use crate::error::GradeError;
use crate::outcome::{Applied, OperationOutcome};
use crate::record::GradeRecord;

/// A single mutation request.
///
/// `Add` keeps its argument as raw text so that non-numeric grades reach the
/// record and are rejected there like any other invalid grade.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add(String),
    RemoveIndex(usize),
    RemoveValue(f64),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(raw) => write!(f, "add={raw}"),
            Operation::RemoveIndex(index) => write!(f, "remove-index={index}"),
            Operation::RemoveValue(value) => write!(f, "remove-value={value}"),
        }
    }
}

impl FromStr for Operation {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = s
            .split_once('=')
            .ok_or_else(|| GradeError::InvalidOperation(format!("missing '=' in {s:?}")))?;
        let arg = arg.trim();

        match verb.trim().to_lowercase().as_str() {
            "add" => Ok(Operation::Add(arg.to_string())),
            "remove-index" | "rm-index" => arg.parse().map(Operation::RemoveIndex).map_err(|_| {
                GradeError::InvalidOperation(format!("index must be a non-negative integer: {arg:?}"))
            }),
            "remove-value" | "rm-value" => arg.parse().map(Operation::RemoveValue).map_err(|_| {
                GradeError::InvalidOperation(format!("value must be a number: {arg:?}"))
            }),
            other => Err(GradeError::InvalidOperation(format!("unknown operation: {other}"))),
        }
    }
}

/// Parse every token, failing on the first malformed one.
pub fn parse_operations<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Operation>, GradeError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Run a single operation against the record.
pub fn apply_operation(record: &mut GradeRecord, operation: &Operation) -> OperationOutcome {
    let result = match operation {
        Operation::Add(raw) => record.add_grade_str(raw).map(Applied::Added),
        Operation::RemoveIndex(index) => record
            .remove_by_index(*index)
            .map(|grade| Applied::RemovedAt {
                index: *index,
                grade,
            }),
        Operation::RemoveValue(value) => record.remove_by_value(*value).map(Applied::Removed),
    };

    OperationOutcome {
        operation: operation.clone(),
        result,
    }
}

/// Run operations in order. Rejections are recorded and the sequence
/// carries on.
pub fn apply_operations(record: &mut GradeRecord, operations: &[Operation]) -> Vec<OperationOutcome> {
    operations
        .iter()
        .map(|op| apply_operation(record, op))
        .collect()
}

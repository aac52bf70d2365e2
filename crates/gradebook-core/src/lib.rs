//! gradebook-core — Grade record model, derivation rules and reporting.
//!
//! A [`GradeRecord`] holds the validated grades of one student and keeps
//! its average, letter grade, pass/fail status and honor-roll flag in step
//! with them. Mutations that fail validation are returned as recoverable
//! [`GradeError`]s and never change the record.

pub mod error;
pub mod grade;
pub mod model;
pub mod outcome;
pub mod parser;
pub mod record;
pub mod report;
pub mod statistics;

pub use error::{GradeError, InvalidGradeReason};
pub use grade::Grade;
pub use model::{LetterGrade, Status};
pub use record::GradeRecord;
pub use report::RecordReport;

//! The single-student grade record.

use tracing::debug;

use crate::error::GradeError;
use crate::grade::Grade;
use crate::model::{LetterGrade, Status};
use crate::report::RecordReport;
use crate::statistics::Summary;

/// Grades for one identified student plus the fields derived from them.
///
/// Derived fields are replaced as a unit after every successful mutation, so
/// callers never observe an average that disagrees with the grades. Failed
/// mutations leave both the grades and the derived fields untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    id: String,
    name: String,
    grades: Vec<Grade>,
    summary: Summary,
}

impl GradeRecord {
    /// Create an empty record. Both `id` and `name` must be non-empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, GradeError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(GradeError::InvalidArgument { field: "id" });
        }
        if name.is_empty() {
            return Err(GradeError::InvalidArgument { field: "name" });
        }

        debug!(%id, %name, "created grade record");
        Ok(Self {
            id,
            name,
            grades: Vec::new(),
            summary: Summary::unset(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in insertion order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn average(&self) -> f64 {
        self.summary.average
    }

    pub fn letter_grade(&self) -> LetterGrade {
        self.summary.letter_grade
    }

    pub fn status(&self) -> Status {
        self.summary.status
    }

    pub fn honor_roll(&self) -> bool {
        self.summary.honor_roll
    }

    /// All derived fields at once.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Append a grade. Out-of-range or NaN values are rejected and the
    /// record is left unchanged.
    pub fn add_grade(&mut self, value: f64) -> Result<Grade, GradeError> {
        let grade = Grade::new(value).inspect_err(|err| self.log_rejection("add", err))?;
        Ok(self.push(grade))
    }

    /// Append a grade given as untyped text, e.g. from the command line.
    /// Text that is not a number is rejected like an out-of-range value.
    pub fn add_grade_str(&mut self, raw: &str) -> Result<Grade, GradeError> {
        let grade = raw
            .parse::<Grade>()
            .inspect_err(|err| self.log_rejection("add", err))?;
        Ok(self.push(grade))
    }

    /// Remove and return the grade at `index` (0-based).
    pub fn remove_by_index(&mut self, index: usize) -> Result<Grade, GradeError> {
        if index >= self.grades.len() {
            let err = GradeError::IndexOutOfRange {
                index,
                len: self.grades.len(),
            };
            self.log_rejection("remove_by_index", &err);
            return Err(err);
        }

        let removed = self.grades.remove(index);
        self.refresh();
        debug!(id = %self.id, index, grade = %removed, "removed grade by index");
        Ok(removed)
    }

    /// Remove the first grade exactly equal to `value`, keeping the order of
    /// the rest.
    pub fn remove_by_value(&mut self, value: f64) -> Result<Grade, GradeError> {
        let Some(position) = self.grades.iter().position(|g| g.value() == value) else {
            let err = GradeError::ValueNotFound(value);
            self.log_rejection("remove_by_value", &err);
            return Err(err);
        };

        let removed = self.grades.remove(position);
        self.refresh();
        debug!(id = %self.id, position, grade = %removed, "removed grade by value");
        Ok(removed)
    }

    /// Snapshot of the record as it currently stands.
    pub fn report(&self) -> RecordReport {
        RecordReport::from_record(self)
    }

    /// Recompute derived fields, then render the text report.
    ///
    /// On a record that was never mutated this replaces the ungraded
    /// sentinel with the derived `F` / failed classification.
    pub fn generate_report(&mut self) -> String {
        self.refreshed_report().to_string()
    }

    /// Recompute derived fields, then snapshot.
    pub fn refreshed_report(&mut self) -> RecordReport {
        self.refresh();
        self.report()
    }

    fn push(&mut self, grade: Grade) -> Grade {
        self.grades.push(grade);
        self.refresh();
        debug!(id = %self.id, %grade, count = self.grades.len(), "added grade");
        grade
    }

    fn refresh(&mut self) {
        self.summary = Summary::compute(&self.grades);
    }

    fn log_rejection(&self, operation: &str, err: &GradeError) {
        debug!(id = %self.id, operation, error = %err, "rejected grade operation");
    }
}

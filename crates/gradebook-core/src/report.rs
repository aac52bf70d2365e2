//! Student report snapshot and its text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::model::{LetterGrade, Status};
use crate::record::GradeRecord;

/// Heading line of the text report.
pub const REPORT_TITLE: &str = "REPORTE DEL ESTUDIANTE";
/// Rule printed under the heading.
pub const REPORT_RULE: &str = "-----------------------------";

/// Everything a report shows, detached from the record it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordReport {
    pub id: String,
    pub name: String,
    /// Grades in insertion order.
    pub grades: Vec<Grade>,
    /// Number of grades held.
    pub count: usize,
    pub average: f64,
    pub letter_grade: LetterGrade,
    pub status: Status,
    pub honor_roll: bool,
}

impl RecordReport {
    /// Snapshot a record without touching its derived fields.
    pub fn from_record(record: &GradeRecord) -> Self {
        let summary = record.summary();
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            grades: record.grades().to_vec(),
            count: record.grades().len(),
            average: summary.average,
            letter_grade: summary.letter_grade,
            status: summary.status,
            honor_roll: summary.honor_roll,
        }
    }
}

/// Render grades as `[95.0, 88.5]`.
pub fn format_grade_list(grades: &[Grade]) -> String {
    let items: Vec<String> = grades.iter().map(Grade::to_string).collect();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for RecordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{REPORT_RULE}")?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nombre: {}", self.name)?;
        writeln!(f, "Calificaciones: {}", format_grade_list(&self.grades))?;
        writeln!(f, "Número de Calificaciones: {}", self.count)?;
        writeln!(f, "Promedio: {:.2}", self.average)?;
        writeln!(f, "Calificación en Letra: {}", self.letter_grade)?;
        writeln!(f, "Estado: {}", self.status.report_label())?;
        writeln!(
            f,
            "Cuadro de Honor: {}",
            if self.honor_roll { "Sí" } else { "No" }
        )
    }
}

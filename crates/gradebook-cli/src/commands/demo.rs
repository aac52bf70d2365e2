//! The `gradebook demo` command.

use anyhow::Result;

use gradebook_core::parser::{apply_operations, parse_operations};
use gradebook_core::GradeRecord;

use super::run::render;

/// The sample session: three valid grades, two rejected ones, one removal by
/// index and one removal of a grade that is not there.
pub const DEMO_SCRIPT: [&str; 7] = [
    "add=95",
    "add=88.5",
    "add=76",
    "add=-5",
    "add=A+",
    "remove-index=2",
    "remove-value=50",
];

pub fn execute(format: String) -> Result<()> {
    let mut record = GradeRecord::new("S001", "Alice Smith")?;
    let operations = parse_operations(&DEMO_SCRIPT)?;
    let outcomes = apply_operations(&mut record, &operations);

    render(&mut record, &outcomes, &format)
}

//! The `gradebook run` command.

use anyhow::Result;
use serde_json::json;

use gradebook_core::outcome::OperationOutcome;
use gradebook_core::parser::{apply_operations, parse_operations};
use gradebook_core::GradeRecord;

pub fn execute(
    id: String,
    name: String,
    format: String,
    fail_on_rejected: bool,
    operations: Vec<String>,
) -> Result<()> {
    let mut record = GradeRecord::new(id, name)?;
    let operations = parse_operations(operations.as_slice())?;
    let outcomes = apply_operations(&mut record, &operations);

    render(&mut record, &outcomes, &format)?;

    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    if fail_on_rejected && rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Print operation outcomes followed by the report in the requested format.
pub fn render(record: &mut GradeRecord, outcomes: &[OperationOutcome], format: &str) -> Result<()> {
    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    tracing::info!(
        id = record.id(),
        applied = outcomes.len() - rejected,
        rejected,
        "operations applied"
    );

    match format {
        "json" => {
            let outcomes: Vec<_> = outcomes
                .iter()
                .map(|o| {
                    json!({
                        "operation": o.operation.to_string(),
                        "accepted": !o.is_rejected(),
                        "message": o.to_string(),
                    })
                })
                .collect();
            let body = json!({
                "outcomes": outcomes,
                "report": record.refreshed_report(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        "table" => {
            print_outcomes(outcomes);
            let report = record.generate_report();
            print_grade_table(record);
            println!();
            print!("{report}");
        }
        "text" => {
            print_outcomes(outcomes);
            println!();
            print!("{}", record.generate_report());
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json or table)"),
    }

    Ok(())
}

fn print_outcomes(outcomes: &[OperationOutcome]) {
    for outcome in outcomes {
        println!("{outcome}");
    }
}

fn print_grade_table(record: &GradeRecord) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Índice", "Calificación"]);

    for (index, grade) in record.grades().iter().enumerate() {
        table.add_row(vec![Cell::new(index), Cell::new(grade)]);
    }

    println!("\n{table}");
}

//! End-to-end record sessions through the public library API.

use gradebook_core::parser::{apply_operations, parse_operations};
use gradebook_core::{GradeError, GradeRecord, LetterGrade, RecordReport, Status};

fn values(record: &GradeRecord) -> Vec<f64> {
    record.grades().iter().map(|g| g.value()).collect()
}

#[test]
fn sample_session_matches_expected_state() {
    let mut record = GradeRecord::new("S001", "Alice Smith").unwrap();
    for v in [95.0, 88.5, 76.0] {
        record.add_grade(v).unwrap();
    }
    assert!(record.add_grade(-5.0).unwrap_err().is_recoverable());
    assert!(record.add_grade_str("A+").unwrap_err().is_recoverable());

    assert_eq!(values(&record), vec![95.0, 88.5, 76.0]);
    assert!((record.average() - 86.5).abs() < 1e-9);
    assert_eq!(record.letter_grade(), LetterGrade::B);
    assert_eq!(record.status(), Status::Passed);
    assert!(!record.honor_roll());

    record.remove_by_index(2).unwrap();
    assert!((record.average() - 91.75).abs() < 1e-9);
    assert_eq!(record.letter_grade(), LetterGrade::A);
    assert!(record.honor_roll());

    let before = record.clone();
    assert_eq!(
        record.remove_by_value(50.0).unwrap_err(),
        GradeError::ValueNotFound(50.0)
    );
    assert_eq!(record, before);
}

#[test]
fn scripted_and_direct_sessions_agree() {
    let tokens = ["add=81", "add=79.5", "add=100", "remove-index=0", "add=x"];

    let mut scripted = GradeRecord::new("S010", "Judy").unwrap();
    let ops = parse_operations(&tokens).unwrap();
    apply_operations(&mut scripted, &ops);

    let mut direct = GradeRecord::new("S010", "Judy").unwrap();
    direct.add_grade(81.0).unwrap();
    direct.add_grade(79.5).unwrap();
    direct.add_grade(100.0).unwrap();
    direct.remove_by_index(0).unwrap();

    assert_eq!(scripted, direct);
    assert_eq!(scripted.generate_report(), direct.generate_report());
}

#[test]
fn json_report_round_trip_preserves_text() {
    let mut record = GradeRecord::new("S011", "Ken").unwrap();
    for v in [60.0, 61.0, 59.0] {
        record.add_grade(v).unwrap();
    }
    let report = record.refreshed_report();

    let json = serde_json::to_string(&report).unwrap();
    let loaded: RecordReport = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.to_string(), report.to_string());
    assert_eq!(loaded.letter_grade, LetterGrade::D);
    assert_eq!(loaded.status, Status::Passed);
}

#[test]
fn report_rejects_out_of_range_grades_on_load() {
    let json = r#"{
        "id": "S012",
        "name": "Leo",
        "grades": [95.0, 140.0],
        "count": 2,
        "average": 117.5,
        "letter_grade": "A",
        "status": "passed",
        "honor_roll": true
    }"#;
    assert!(serde_json::from_str::<RecordReport>(json).is_err());
}

//! Integration tests for answer-sheet loading, scoring and report output.

use designfit::{AnswerSheet, CliError, MAX_SHEET_FILE_SIZE, SheetFormat};
use designfit_core::{AssessmentError, QuestionBank, Tier};
use std::io::Write;
use tempfile::NamedTempFile;

const TOP_SHEET_TOML: &str = r#"
[psychometric]
q1 = "a"
q2 = "a"
q3 = "a"
q4 = "a"
q5 = "a"
q6 = "a"
q7 = "a"
q8 = "a"

[technical]
t1 = "a"
t2 = "b"
t3 = "c"
t4 = "c"
t5 = "b"
t6 = "c"
t7 = "c"
t8 = "b"

[wiscar]
w1 = "a"
w2 = "a"
i1 = "a"
i2 = "a"
s1 = "a"
s2 = "a"
c1 = "a"
c2 = "a"
a1 = "a"
a2 = "a"
r1 = "a"
r2 = "a"
"#;

fn sheet_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write");
    file.flush().expect("flush");
    file
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn toml_sheet_scores_excellent() {
    let file = sheet_file(".toml", TOP_SHEET_TOML);
    let sheet = AnswerSheet::load(file.path(), None).expect("load");
    assert_eq!(sheet.len(), 28);

    let report = sheet.score(QuestionBank::standard()).expect("score");
    assert_eq!(report.aggregate.overall, 99);
    assert_eq!(report.recommendation.tier, Tier::Excellent);
}

#[test]
fn json_sheet_matches_toml_sheet() {
    let toml_sheet = AnswerSheet::parse(TOP_SHEET_TOML, SheetFormat::Toml).expect("toml");
    let json = serde_json::to_string(&toml_sheet).expect("serialize");

    let file = sheet_file(".json", &json);
    let json_sheet = AnswerSheet::load(file.path(), None).expect("load");
    assert_eq!(json_sheet, toml_sheet);
}

#[test]
fn explicit_format_overrides_extension() {
    let file = sheet_file(".txt", TOP_SHEET_TOML);
    assert!(matches!(
        AnswerSheet::load(file.path(), None),
        Err(CliError::UnknownFormat(_))
    ));
    let sheet = AnswerSheet::load(file.path(), Some(SheetFormat::Toml)).expect("load");
    assert_eq!(sheet.len(), 28);
}

#[test]
fn oversized_sheet_is_rejected() {
    let padding = "#".repeat(usize::try_from(MAX_SHEET_FILE_SIZE).expect("size") + 1);
    let file = sheet_file(".toml", &padding);
    assert!(matches!(
        AnswerSheet::load(file.path(), None),
        Err(CliError::FileTooLarge { .. })
    ));
}

#[test]
fn missing_file_and_directory_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        AnswerSheet::load(&dir.path().join("absent.toml"), None),
        Err(CliError::InvalidPath { .. })
    ));

    let nested = dir.path().join("nested.toml");
    std::fs::create_dir(&nested).expect("mkdir");
    assert!(matches!(
        AnswerSheet::load(&nested, None),
        Err(CliError::InvalidPath { .. })
    ));
}

// =============================================================================
// SCORING ERRORS
// =============================================================================

#[test]
fn invalid_option_is_reported() {
    let text = TOP_SHEET_TOML.replace("t3 = \"c\"", "t3 = \"z\"");
    let sheet = AnswerSheet::parse(&text, SheetFormat::Toml).expect("parse");
    let err = sheet.score(QuestionBank::standard()).expect_err("invalid");
    assert!(matches!(
        err,
        CliError::Assessment(AssessmentError::InvalidOption { ref question, .. }) if question == "t3"
    ));
}

#[test]
fn question_under_wrong_instrument_is_reported() {
    let text = TOP_SHEET_TOML.replace("[technical]\n", "[technical]\nq1 = \"a\"\n");
    let sheet = AnswerSheet::parse(&text, SheetFormat::Toml).expect("parse");
    assert!(matches!(
        sheet.score(QuestionBank::standard()),
        Err(CliError::Assessment(
            AssessmentError::UnknownQuestion { .. }
        ))
    ));
}

#[test]
fn missing_answer_is_reported() {
    let text = TOP_SHEET_TOML.replace("r2 = \"a\"\n", "");
    let sheet = AnswerSheet::parse(&text, SheetFormat::Toml).expect("parse");
    assert!(matches!(
        sheet.score(QuestionBank::standard()),
        Err(CliError::Assessment(
            AssessmentError::IncompleteInstrument {
                answered: 11,
                total: 12,
                ..
            }
        ))
    ));
}

// =============================================================================
// REPORT OUTPUT
// =============================================================================

#[test]
fn report_json_uses_kebab_case_identifiers() {
    let sheet = AnswerSheet::parse(TOP_SHEET_TOML, SheetFormat::Toml).expect("parse");
    let report = sheet.score(QuestionBank::standard()).expect("score");
    let json = serde_json::to_value(&report).expect("json");

    assert_eq!(json["recommendation"]["tier"], "excellent");
    assert_eq!(json["aggregate"]["overall"], 99);
    assert!(json["wiscar"]["dimensions"]["real-world"].is_object());
    assert_eq!(
        json["recommendation"]["career_fits"][0]["path"],
        "residential-designer"
    );
}

#[test]
fn text_report_lists_next_steps() {
    let sheet = AnswerSheet::parse(TOP_SHEET_TOML, SheetFormat::Toml).expect("parse");
    let report = sheet.score(QuestionBank::standard()).expect("score");

    let mut out = Vec::new();
    designfit::render::write_report(&mut out, &report).expect("render");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains("Overall score: 99%"));
    assert!(text.contains("Recommendation: Excellent Fit"));
    for step in Tier::Excellent.next_steps() {
        assert!(text.contains(step));
    }
}

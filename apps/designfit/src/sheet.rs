//! # Answer Sheets
//!
//! A complete set of answers in a file, scored in one pass through a
//! [`Session`]:
//!
//! ```toml
//! [psychometric]
//! q1 = "a"
//! q2 = "c"
//!
//! [technical]
//! t1 = "a"
//!
//! [wiscar]
//! w1 = "b"
//! ```
//!
//! The JSON form has the same shape. Sheets are fed through the same session
//! API the interactive front end uses, so every engine check applies.

use crate::error::CliError;
use designfit_core::{Advance, AssessmentReport, Instrument, QuestionBank, Session};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum answer sheet size (1 MiB).
pub const MAX_SHEET_FILE_SIZE: u64 = 1024 * 1024;

/// Resolve `path` to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, CliError> {
    let canonical = path.canonicalize().map_err(|e| CliError::InvalidPath {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if !canonical.is_file() {
        return Err(CliError::InvalidPath {
            path: path.display().to_string(),
            reason: "not a regular file".to_string(),
        });
    }

    Ok(canonical)
}

fn validate_file_size(path: &Path, limit: u64) -> Result<(), CliError> {
    let size = std::fs::metadata(path)?.len();
    if size > limit {
        return Err(CliError::FileTooLarge { size, limit });
    }
    Ok(())
}

// =============================================================================
// FORMAT
// =============================================================================

/// Encoding of an answer sheet file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Toml,
    Json,
}

impl SheetFormat {
    /// Parse a `--format` value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Some(SheetFormat::Toml),
            "json" => Some(SheetFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

// =============================================================================
// ANSWER SHEET
// =============================================================================

/// Question id → option id, per instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    #[serde(default)]
    pub psychometric: BTreeMap<String, String>,
    #[serde(default)]
    pub technical: BTreeMap<String, String>,
    #[serde(default)]
    pub wiscar: BTreeMap<String, String>,
}

impl AnswerSheet {
    /// Decode a sheet from text.
    pub fn parse(text: &str, format: SheetFormat) -> Result<Self, CliError> {
        let sheet = match format {
            SheetFormat::Toml => toml::from_str(text)?,
            SheetFormat::Json => serde_json::from_str(text)?,
        };
        Ok(sheet)
    }

    /// Read and decode a sheet file. `format` overrides the extension.
    pub fn load(path: &Path, format: Option<SheetFormat>) -> Result<Self, CliError> {
        let format = format
            .or_else(|| SheetFormat::from_path(path))
            .ok_or_else(|| CliError::UnknownFormat(path.display().to_string()))?;

        let validated = validate_file_path(path)?;
        validate_file_size(&validated, MAX_SHEET_FILE_SIZE)?;

        tracing::debug!("Reading answer sheet {:?} as {:?}", validated, format);
        let text = std::fs::read_to_string(&validated)?;
        Self::parse(&text, format)
    }

    #[must_use]
    pub fn answers(&self, instrument: Instrument) -> &BTreeMap<String, String> {
        match instrument {
            Instrument::Psychometric => &self.psychometric,
            Instrument::Technical => &self.technical,
            Instrument::Wiscar => &self.wiscar,
        }
    }

    /// Total number of answers across instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        Instrument::ALL
            .iter()
            .map(|i| self.answers(*i).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the sheet through a fresh session and return the report.
    ///
    /// Fails with the first engine error: an unknown question or option, or
    /// an instrument with unanswered questions.
    pub fn score(&self, bank: &QuestionBank) -> Result<AssessmentReport, CliError> {
        let mut session = Session::new(bank);
        session.start()?;

        while let Ok(instrument) = session.active_instrument() {
            for (question, option) in self.answers(instrument) {
                session.record_answer(question, option)?;
            }
            tracing::debug!(
                "Recorded {} {} answers",
                self.answers(instrument).len(),
                instrument
            );

            while session.advance()? == Advance::NextQuestion {}
        }

        let report = session
            .report()
            .ok_or(CliError::NoReport(session.stage()))?;
        tracing::info!(
            "Scored answer sheet: overall {} ({})",
            report.aggregate.overall,
            report.recommendation.tier.as_str()
        );
        Ok(report)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SheetFormat::from_path(Path::new("a.toml")),
            Some(SheetFormat::Toml)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("a.JSON")),
            Some(SheetFormat::Json)
        );
        assert_eq!(SheetFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(SheetFormat::from_path(Path::new("sheet")), None);
    }

    #[test]
    fn toml_and_json_decode_alike() {
        let toml_sheet = AnswerSheet::parse(
            "[psychometric]\nq1 = \"a\"\n[wiscar]\nw1 = \"b\"\n",
            SheetFormat::Toml,
        )
        .expect("toml");
        let json_sheet = AnswerSheet::parse(
            r#"{"psychometric": {"q1": "a"}, "wiscar": {"w1": "b"}}"#,
            SheetFormat::Json,
        )
        .expect("json");
        assert_eq!(toml_sheet, json_sheet);
        assert_eq!(toml_sheet.len(), 2);
        assert!(toml_sheet.technical.is_empty());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let result = AnswerSheet::parse("[personality]\nq1 = \"a\"\n", SheetFormat::Toml);
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn empty_sheet_fails_on_first_instrument() {
        let err = AnswerSheet::default()
            .score(QuestionBank::standard())
            .expect_err("incomplete");
        assert!(matches!(
            err,
            CliError::Assessment(designfit_core::AssessmentError::IncompleteInstrument {
                instrument: Instrument::Psychometric,
                answered: 0,
                ..
            })
        ));
    }
}

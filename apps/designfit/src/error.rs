//! # CLI Errors
//!
//! Everything the binary can fail with. Engine errors pass through unchanged;
//! the rest come from reading and decoding answer sheets.

use designfit_core::{AssessmentError, BankError, Stage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Question bank failed validation: {0}")]
    Bank(#[from] BankError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML answer sheet: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("File size {size} bytes exceeds maximum allowed {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Cannot determine answer sheet format of '{0}' (use --format toml|json)")]
    UnknownFormat(String),

    #[error("Assessment stopped in stage {0} without a report")]
    NoReport(Stage),

    #[error("Unknown instrument '{0}' (expected psychometric, technical or wiscar)")]
    UnknownInstrument(String),
}

//! # designfit
//!
//! Terminal front end for the designfit assessment engine.
//!
//! The library half exposes the pieces the binary is built from so they can
//! be exercised directly in tests: answer-sheet loading, the interactive
//! loop, text rendering and the CLI command set.

pub mod cli;
pub mod error;
pub mod interactive;
pub mod render;
pub mod sheet;

pub use error::CliError;
pub use sheet::{AnswerSheet, MAX_SHEET_FILE_SIZE, SheetFormat};

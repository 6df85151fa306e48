//! # designfit CLI Module
//!
//! This module implements the CLI interface for designfit.
//!
//! ## Available Commands
//!
//! - `run` - Take the assessment interactively (default)
//! - `score` - Score a TOML or JSON answer sheet
//! - `bank` - List the questions of one or all instruments
//! - `tiers` - Show recommendation tiers and their next steps

mod commands;

use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// designfit - Interior Design Career Assessment
///
/// Psychological fit, technical aptitude and WISCAR readiness, combined into
/// one weighted score and a recommendation.
#[derive(Parser, Debug)]
#[command(name = "designfit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the assessment interactively
    Run,

    /// Score a complete answer sheet
    Score {
        /// Path to the answer sheet (.toml or .json)
        #[arg(short, long)]
        answers: PathBuf,

        /// Sheet format (toml, json); defaults to the file extension
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the question bank
    Bank {
        /// Only this instrument (psychometric, technical, wiscar)
        #[arg(short, long)]
        instrument: Option<String>,
    },

    /// Show recommendation tiers and next steps
    Tiers,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json;

    match cli.command {
        Some(Commands::Run) | None => cmd_run(json_mode),
        Some(Commands::Score { answers, format }) => {
            cmd_score(json_mode, &answers, format.as_deref())
        }
        Some(Commands::Bank { instrument }) => cmd_bank(json_mode, instrument.as_deref()),
        Some(Commands::Tiers) => cmd_tiers(json_mode),
    }
}

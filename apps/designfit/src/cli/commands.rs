//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::error::CliError;
use crate::interactive;
use crate::render;
use crate::sheet::{AnswerSheet, SheetFormat};
use designfit_core::{Instrument, QuestionBank, Tier};
use std::io::{self, Write};
use std::path::Path;

/// The compiled-in bank, checked before use.
fn load_bank() -> Result<&'static QuestionBank, CliError> {
    let bank = QuestionBank::standard();
    bank.validate()?;
    Ok(bank)
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Take the assessment on stdin/stdout.
pub fn cmd_run(json_mode: bool) -> Result<(), CliError> {
    let bank = load_bank()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let Some(report) = interactive::run(bank, &mut input, &mut stdout)? else {
        writeln!(stdout, "Assessment ended without results.")?;
        return Ok(());
    };

    if json_mode {
        return print_json(&report);
    }
    render::write_report(&mut stdout, &report)?;
    Ok(())
}

// =============================================================================
// SCORE COMMAND
// =============================================================================

/// Score an answer sheet file.
pub fn cmd_score(json_mode: bool, answers: &Path, format: Option<&str>) -> Result<(), CliError> {
    let format = format
        .map(|f| SheetFormat::parse(f).ok_or_else(|| CliError::UnknownFormat(f.to_string())))
        .transpose()?;

    tracing::info!("Scoring answer sheet {:?}", answers);
    let sheet = AnswerSheet::load(answers, format)?;
    let report = sheet.score(load_bank()?)?;

    if json_mode {
        return print_json(&report);
    }
    render::write_report(&mut io::stdout(), &report)?;
    Ok(())
}

// =============================================================================
// BANK COMMAND
// =============================================================================

/// List the question bank.
pub fn cmd_bank(json_mode: bool, instrument: Option<&str>) -> Result<(), CliError> {
    let bank = load_bank()?;
    let instrument = instrument
        .map(|name| {
            Instrument::parse(name).ok_or_else(|| CliError::UnknownInstrument(name.to_string()))
        })
        .transpose()?;

    if json_mode {
        let questions: Vec<_> = Instrument::ALL
            .into_iter()
            .filter(|i| instrument.is_none_or(|only| only == *i))
            .flat_map(|i| bank.questions_for(i))
            .collect();
        return print_json(&questions);
    }

    render::write_bank(&mut io::stdout(), bank, instrument)?;
    Ok(())
}

// =============================================================================
// TIERS COMMAND
// =============================================================================

/// Show recommendation tiers.
pub fn cmd_tiers(json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        let tiers: Vec<_> = Tier::ALL
            .iter()
            .map(|tier| {
                serde_json::json!({
                    "tier": tier,
                    "label": tier.label(),
                    "lower_bound": tier.lower_bound(),
                    "next_steps": tier.next_steps(),
                })
            })
            .collect();
        return print_json(&tiers);
    }

    render::write_tiers(&mut io::stdout())?;
    Ok(())
}

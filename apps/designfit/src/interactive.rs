//! # Interactive Questionnaire
//!
//! Line-oriented terminal front end over a [`Session`].
//!
//! ## Input
//!
//! - `1`..`N` - select an option of the current question
//! - `n` or empty line - next question (finishes the stage on the last one)
//! - `p` - previous question
//! - `q` - quit without results

use crate::error::CliError;
use crate::render;
use designfit_core::{Advance, AssessmentReport, QuestionBank, Session, Stage};
use std::io::{BufRead, Write};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// 1-based option number.
    Choose(usize),
    Next,
    Previous,
    Quit,
    Unknown(String),
}

impl Input {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Input::Next,
            "p" | "prev" | "previous" => Input::Previous,
            "q" | "quit" | "exit" => Input::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Input::Choose(n),
                _ => Input::Unknown(line.to_string()),
            },
        }
    }
}

/// Read one line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run a full assessment over `input`/`output`.
///
/// Returns the report, or `None` if the user quit or input ended first.
pub fn run(
    bank: &QuestionBank,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<AssessmentReport>, CliError> {
    let mut session = Session::new(bank);

    render::write_stage_banner(output, Stage::Intro)?;
    writeln!(
        output,
        "Discover whether interior design is the right career path for you."
    )?;
    writeln!(output, "Press Enter to begin, or q to quit.")?;
    output.flush()?;

    match read_line(input)?.map(|l| Input::parse(&l)) {
        None | Some(Input::Quit) => return Ok(None),
        Some(_) => {}
    }

    let stage = session.start()?;
    tracing::info!("Assessment started");
    render::write_stage_banner(output, stage)?;

    loop {
        let Some(question) = session.current_question() else {
            break;
        };
        render::write_question(
            output,
            &question,
            session.current_answer(),
            session.progress(),
        )?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            tracing::info!("Input closed in stage {}", session.stage());
            return Ok(None);
        };

        let outcome = match Input::parse(&line) {
            Input::Quit => {
                tracing::info!("Assessment abandoned in stage {}", session.stage());
                return Ok(None);
            }
            Input::Choose(number) => match question.options.get(number - 1) {
                Some(option) => session.record_answer(question.id, option.id).map(|_| ()),
                None => {
                    writeln!(output, "Choose 1 to {}.", question.options.len())?;
                    Ok(())
                }
            },
            Input::Previous => session.previous().map(|moved| {
                if !moved {
                    tracing::debug!("Already at the first question");
                }
            }),
            Input::Next => match session.advance() {
                Ok(Advance::StageCompleted(next)) => {
                    tracing::info!("Entered stage {}", next);
                    if next.is_terminal() {
                        break;
                    }
                    render::write_stage_banner(output, next)?;
                    Ok(())
                }
                Ok(Advance::NextQuestion) => Ok(()),
                Err(e) => Err(e),
            },
            Input::Unknown(text) => {
                writeln!(output, "Unrecognised input '{}' (1-N, n, p, q).", text)?;
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::warn!("{}", e);
            writeln!(output, "! {}", e)?;
        }
    }

    let report = session
        .report()
        .ok_or(CliError::NoReport(session.stage()))?;
    Ok(Some(report))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use designfit_core::Tier;
    use std::io::Cursor;

    fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
        let mut text = lines.join("\n");
        text.push('\n');
        Cursor::new(text.into_bytes())
    }

    #[test]
    fn parse_inputs() {
        assert_eq!(Input::parse("3\n"), Input::Choose(3));
        assert_eq!(Input::parse(""), Input::Next);
        assert_eq!(Input::parse(" N "), Input::Next);
        assert_eq!(Input::parse("p"), Input::Previous);
        assert_eq!(Input::parse("Q"), Input::Quit);
        assert_eq!(Input::parse("0"), Input::Unknown("0".to_string()));
        assert_eq!(Input::parse("x"), Input::Unknown("x".to_string()));
    }

    #[test]
    fn quit_at_intro_returns_nothing() {
        let mut output = Vec::new();
        let report = run(QuestionBank::standard(), &mut script(&["q"]), &mut output)
            .expect("run");
        assert!(report.is_none());
    }

    #[test]
    fn end_of_input_mid_stage_returns_nothing() {
        let mut output = Vec::new();
        let report = run(
            QuestionBank::standard(),
            &mut script(&["", "1", "n"]),
            &mut output,
        )
        .expect("run");
        assert!(report.is_none());
    }

    #[test]
    fn next_without_answer_reports_error_and_stays() {
        let mut output = Vec::new();
        run(QuestionBank::standard(), &mut script(&["", "n", "q"]), &mut output).expect("run");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("! psychometric instrument incomplete: 0 of 8"));
    }

    #[test]
    fn scripted_run_reaches_results() {
        let mut lines = vec![""];
        lines.extend(std::iter::repeat_n(["1", "n"], 8).flatten());
        for pick in ["1", "2", "3", "3", "2", "3", "3", "2"] {
            lines.extend([pick, "n"]);
        }
        lines.extend(std::iter::repeat_n(["1", "n"], 12).flatten());

        let mut output = Vec::new();
        let report = run(QuestionBank::standard(), &mut script(&lines), &mut output)
            .expect("run")
            .expect("report");

        assert_eq!(report.aggregate.overall, 99);
        assert_eq!(report.recommendation.tier, Tier::Excellent);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("WISCAR Framework Analysis"));
    }

    #[test]
    fn previous_keeps_recorded_answer() {
        let mut output = Vec::new();
        run(
            QuestionBank::standard(),
            &mut script(&["", "2", "n", "p", "q"]),
            &mut output,
        )
        .expect("run");
        let text = String::from_utf8(output).expect("utf8");
        // q1 shown three times; the last one has option 2 marked
        assert_eq!(text.matches("Question 1 of 8").count(), 3);
        assert!(text.contains(" * 2) "));
    }
}

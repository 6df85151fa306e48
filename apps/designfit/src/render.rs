//! # Text Rendering
//!
//! Plain-text views for the terminal. Every function writes to any
//! `io::Write` so the output can be captured in tests.

use designfit_core::{
    AssessmentReport, Category, Dimension, Instrument, Progress, QuestionBank, QuestionView,
    SkillType, Stage, Tag, Tier,
};
use std::io::{self, Write};

/// Horizontal rule under section titles.
fn underline(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

// =============================================================================
// QUESTIONS
// =============================================================================

/// Print the heading shown when a stage begins.
pub fn write_stage_banner(out: &mut impl Write, stage: Stage) -> io::Result<()> {
    writeln!(out)?;
    match stage.instrument() {
        Some(instrument) => underline(out, instrument.title()),
        None => underline(out, stage.name()),
    }
}

/// Print one question with its options; `selected` marks the recorded answer.
pub fn write_question(
    out: &mut impl Write,
    question: &QuestionView,
    selected: Option<&str>,
    progress: Option<Progress>,
) -> io::Result<()> {
    writeln!(out)?;
    if let Some(p) = progress {
        writeln!(
            out,
            "Question {} of {} ({}%)",
            p.position + 1,
            p.total,
            p.percent
        )?;
    }
    if let Some(heading) = question.heading {
        writeln!(out, "[{}]", heading)?;
    }
    writeln!(out, "{}", question.prompt)?;
    for (index, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.id) { '*' } else { ' ' };
        writeln!(out, " {} {}) {}", marker, index + 1, option.text)?;
    }
    Ok(())
}

/// Print a whole instrument, or the full bank.
pub fn write_bank(
    out: &mut impl Write,
    bank: &QuestionBank,
    instrument: Option<Instrument>,
) -> io::Result<()> {
    let instruments: Vec<Instrument> = match instrument {
        Some(i) => vec![i],
        None => Instrument::ALL.to_vec(),
    };

    for instrument in instruments {
        writeln!(out)?;
        underline(
            out,
            &format!(
                "{} ({} questions, weight {}%)",
                instrument.title(),
                bank.len(instrument),
                instrument.weight_percent()
            ),
        )?;
        for question in bank.questions_for(instrument) {
            writeln!(out)?;
            write!(out, "{} [{}] ", question.id, question.tag)?;
            if let Some(heading) = question.heading {
                write!(out, "{}: ", heading)?;
            }
            writeln!(out, "{}", question.prompt)?;
            for option in &question.options {
                writeln!(out, "    {}) {}", option.id, option.text)?;
            }
        }
    }
    Ok(())
}

// =============================================================================
// RESULTS
// =============================================================================

fn write_lines(out: &mut impl Write, title: &str, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(out, "  {}:", title)?;
    for line in lines {
        writeln!(out, "    - {}", line)?;
    }
    Ok(())
}

/// Print the full results view.
pub fn write_report(out: &mut impl Write, report: &AssessmentReport) -> io::Result<()> {
    let aggregate = &report.aggregate;
    let recommendation = &report.recommendation;

    writeln!(out)?;
    underline(out, "Your Interior Design Career Assessment Results")?;
    writeln!(out, "Overall score: {}%", aggregate.overall)?;
    writeln!(out, "Recommendation: {}", recommendation.tier)?;

    writeln!(out)?;
    writeln!(
        out,
        "{:<32} {:>4}%",
        Instrument::Psychometric.title(),
        aggregate.psychometric
    )?;
    for category in Category::ALL {
        let bucket = report.psychometric.category(*category);
        writeln!(
            out,
            "  {:<30} {:>2}/{:<2} {:>4}%",
            category.label(),
            bucket.earned,
            bucket.max,
            bucket.percent()
        )?;
    }
    write_lines(out, "Insights", &report.insights.psychometric)?;

    writeln!(
        out,
        "{:<32} {:>4}%",
        Instrument::Technical.title(),
        aggregate.technical
    )?;
    for skill in SkillType::ALL {
        let bucket = report.technical.skill(*skill);
        writeln!(
            out,
            "  {:<30} {:>2}/{:<2} correct",
            skill.label(),
            bucket.earned,
            bucket.max
        )?;
    }
    write_lines(out, "Insights", &report.insights.technical)?;

    writeln!(
        out,
        "{:<32} {:>4}%",
        Instrument::Wiscar.title(),
        aggregate.wiscar
    )?;
    for dimension in Dimension::ALL {
        writeln!(
            out,
            "  {:<30} {:>4}%",
            dimension.label(),
            report.wiscar.dimension_percent(*dimension)
        )?;
    }
    write_lines(out, "Strengths", &report.insights.wiscar.strengths)?;
    write_lines(
        out,
        "Development areas",
        &report.insights.wiscar.development_areas,
    )?;

    writeln!(out)?;
    writeln!(out, "Career paths:")?;
    for fit in &recommendation.career_fits {
        let mark = if fit.fit { "fit" } else { "   " };
        writeln!(out, "  [{}] {}", mark, fit.path.title())?;
        writeln!(out, "        {}", fit.path.description())?;
    }

    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    for (index, step) in recommendation.next_steps.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, step)?;
    }
    Ok(())
}

/// Print tier boundaries and their next steps.
pub fn write_tiers(out: &mut impl Write) -> io::Result<()> {
    underline(out, "Recommendation tiers")?;
    for tier in Tier::ALL {
        writeln!(out)?;
        writeln!(out, "{} (overall >= {})", tier.label(), tier.lower_bound())?;
        for step in tier.next_steps() {
            writeln!(out, "  - {}", step)?;
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

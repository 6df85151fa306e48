//! # Core Type Definitions
//!
//! This module contains the closed vocabularies of the assessment:
//! - The three instruments (`Instrument`)
//! - Per-instrument classification tags (`Category`, `SkillType`, `Dimension`)
//! - Error types (`AssessmentError`, `BankError`)
//!
//! ## Determinism Guarantees
//!
//! All tags implement `Ord` so bucket maps are `BTreeMap`s with a stable
//! iteration order, and every tag enum lists its variants in `ALL` so a
//! bucket map can be seeded exhaustively before any answer is folded in.

use crate::system::Stage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// INSTRUMENT
// =============================================================================

/// One of the three self-contained question sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Instrument {
    Psychometric,
    Technical,
    Wiscar,
}

impl Instrument {
    pub const ALL: [Instrument; 3] = [
        Instrument::Psychometric,
        Instrument::Technical,
        Instrument::Wiscar,
    ];

    /// Stable identifier used in answer sheets and JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Psychometric => "psychometric",
            Instrument::Technical => "technical",
            Instrument::Wiscar => "wiscar",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Instrument::Psychometric => "Psychological Fit Assessment",
            Instrument::Technical => "Technical Aptitude Assessment",
            Instrument::Wiscar => "WISCAR Framework Analysis",
        }
    }

    /// Weight of this instrument in the aggregate score, in percent.
    #[must_use]
    pub fn weight_percent(&self) -> u32 {
        match self {
            Instrument::Psychometric => crate::primitives::PSYCHOMETRIC_WEIGHT,
            Instrument::Technical => crate::primitives::TECHNICAL_WEIGHT,
            Instrument::Wiscar => crate::primitives::WISCAR_WEIGHT,
        }
    }

    /// Parse an instrument identifier (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TAG TRAIT
// =============================================================================

/// A closed classification tag attached to a question.
///
/// Implemented by the three per-instrument tag enums so the scorer can seed
/// and fold buckets generically.
pub trait Tag: Copy + Ord + std::fmt::Debug + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Stable kebab-case identifier.
    fn as_str(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;
}

// =============================================================================
// PSYCHOMETRIC CATEGORY
// =============================================================================

/// Category of a psychometric question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Interest,
    Personality,
    Motivation,
    Cognitive,
}

impl Tag for Category {
    const ALL: &'static [Self] = &[
        Category::Interest,
        Category::Personality,
        Category::Motivation,
        Category::Cognitive,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Category::Interest => "interest",
            Category::Personality => "personality",
            Category::Motivation => "motivation",
            Category::Cognitive => "cognitive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Category::Interest => "Design Interest",
            Category::Personality => "Personality Fit",
            Category::Motivation => "Motivation",
            Category::Cognitive => "Cognitive Style",
        }
    }
}

// =============================================================================
// TECHNICAL SKILL TYPE
// =============================================================================

/// Skill type probed by a technical question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillType {
    Spatial,
    Technical,
    Numerical,
    Situational,
}

impl Tag for SkillType {
    const ALL: &'static [Self] = &[
        SkillType::Spatial,
        SkillType::Technical,
        SkillType::Numerical,
        SkillType::Situational,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SkillType::Spatial => "spatial",
            SkillType::Technical => "technical",
            SkillType::Numerical => "numerical",
            SkillType::Situational => "situational",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SkillType::Spatial => "Spatial Skills",
            SkillType::Technical => "Technical Skills",
            SkillType::Numerical => "Numerical Skills",
            SkillType::Situational => "Situational Skills",
        }
    }
}

// =============================================================================
// WISCAR DIMENSION
// =============================================================================

/// One of the six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    /// Short description shown next to the dimension score.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Will => "Your determination and persistence in pursuing long-term goals",
            Dimension::Interest => "Your natural fascination with design and aesthetics",
            Dimension::Skill => "Your current technical and creative capabilities",
            Dimension::Cognitive => "Your problem-solving and spatial thinking abilities",
            Dimension::Ability => "Your openness to feedback and learning agility",
            Dimension::RealWorld => {
                "How well you align with industry demands and work environment"
            }
        }
    }
}

impl Tag for Dimension {
    const ALL: &'static [Self] = &[
        Dimension::Will,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Cognitive,
        Dimension::Ability,
        Dimension::RealWorld,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Dimension::Will => "will",
            Dimension::Interest => "interest",
            Dimension::Skill => "skill",
            Dimension::Cognitive => "cognitive",
            Dimension::Ability => "ability",
            Dimension::RealWorld => "real-world",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Dimension::Will => "Will (Drive & Consistency)",
            Dimension::Interest => "Interest (Genuine Curiosity)",
            Dimension::Skill => "Skill (Existing Abilities)",
            Dimension::Cognitive => "Cognitive Readiness",
            Dimension::Ability => "Ability to Learn",
            Dimension::RealWorld => "Real-world Alignment",
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced to the presentation layer.
///
/// - No error is fatal; the caller retries with valid input
/// - A rejected operation never mutates session state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The option does not belong to the question.
    #[error("Option '{option}' is not an option of question '{question}'")]
    InvalidOption { question: String, option: String },

    /// The question does not belong to the instrument.
    #[error("Question '{question}' is not part of the {instrument} instrument")]
    UnknownQuestion {
        instrument: Instrument,
        question: String,
    },

    /// Advance was requested before the required answers were recorded.
    #[error("{instrument} instrument incomplete: {answered} of {total} questions answered")]
    IncompleteInstrument {
        instrument: Instrument,
        answered: usize,
        total: usize,
    },

    /// A stage transition that skips a stage or re-enters a finished one.
    #[error("Transition '{event}' not permitted from stage {from}")]
    OutOfSequenceTransition { from: Stage, event: &'static str },

    /// The operation needs an active instrument but the session is not in one.
    #[error("No instrument is active in stage {stage}")]
    NotInInstrument { stage: Stage },
}

/// Violations of the static question bank invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("{0} bank has no questions")]
    Empty(Instrument),

    #[error("Question '{question}' in {instrument} bank has fewer than two options")]
    TooFewOptions {
        instrument: Instrument,
        question: &'static str,
    },

    #[error("Duplicate question id '{question}' in {instrument} bank")]
    DuplicateQuestion {
        instrument: Instrument,
        question: &'static str,
    },

    #[error("Duplicate option id '{option}' in question '{question}'")]
    DuplicateOption {
        question: &'static str,
        option: &'static str,
    },

    #[error("Option '{option}' of question '{question}' scores {points}, outside 1..={max}")]
    PointsOutOfRange {
        question: &'static str,
        option: &'static str,
        points: u8,
        max: u8,
    },

    #[error("Question '{question}' must have exactly one correct option, found {found}")]
    CorrectOptionCount {
        question: &'static str,
        found: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_all_lists_every_variant_once() {
        assert_eq!(Category::ALL.len(), 4);
        assert_eq!(SkillType::ALL.len(), 4);
        assert_eq!(Dimension::ALL.len(), 6);

        let unique: std::collections::BTreeSet<_> = Dimension::ALL.iter().collect();
        assert_eq!(unique.len(), Dimension::ALL.len());
    }

    #[test]
    fn real_world_serializes_kebab_case() {
        let json = serde_json::to_string(&Dimension::RealWorld).expect("serialize");
        assert_eq!(json, "\"real-world\"");
        assert_eq!(Dimension::RealWorld.as_str(), "real-world");
    }

    #[test]
    fn instrument_parse_is_case_insensitive() {
        assert_eq!(Instrument::parse("WISCAR"), Some(Instrument::Wiscar));
        assert_eq!(Instrument::parse(" technical "), Some(Instrument::Technical));
        assert_eq!(Instrument::parse("aptitude"), None);
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = Instrument::ALL.iter().map(|i| i.weight_percent()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = AssessmentError::InvalidOption {
            question: "q1".to_string(),
            option: "z".to_string(),
        };
        assert!(err.to_string().contains("'z'"));
        assert!(err.to_string().contains("'q1'"));
    }
}

//! # Question Bank
//!
//! Static, read-only question sets for the three instruments.
//!
//! A bank is constructed once and never mutated. Each question carries a
//! closed tag (`Category`, `SkillType` or `Dimension`) and an ordered list of
//! options whose payload type is fixed per instrument:
//!
//! | Instrument   | Question type                 | Option payload          |
//! |--------------|-------------------------------|-------------------------|
//! | Psychometric | `Question<Category, u8>`      | points 1..=5            |
//! | Technical    | `Question<SkillType, bool>`   | correctness flag        |
//! | WISCAR       | `Question<Dimension, u8>`     | points 1..=5            |
//!
//! The presentation layer only ever sees [`QuestionView`]s, which omit the
//! scoring payload.

mod standard;

use crate::primitives::{MAX_OPTION_POINTS, MIN_OPTION_POINTS};
use crate::{AssessmentError, BankError, Category, Dimension, Instrument, SkillType, Tag};
use serde::Serialize;
use std::collections::BTreeSet;

// =============================================================================
// QUESTION & OPTION
// =============================================================================

/// A selectable option with its scoring payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice<P: 'static> {
    /// Identifier, unique within the owning question.
    pub id: &'static str,
    /// Display text.
    pub text: &'static str,
    /// Points (`u8`) or correctness (`bool`).
    pub payload: P,
}

/// An immutable question from the static bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question<T: 'static, P: 'static> {
    /// Identifier, unique within the instrument.
    pub id: &'static str,
    /// Optional topic heading shown above the prompt.
    pub heading: Option<&'static str>,
    pub prompt: &'static str,
    pub tag: T,
    pub options: &'static [Choice<P>],
    /// Why the correct option is correct (technical items only).
    pub explanation: Option<&'static str>,
}

pub type PsychometricQuestion = Question<Category, u8>;
pub type TechnicalQuestion = Question<SkillType, bool>;
pub type WiscarQuestion = Question<Dimension, u8>;

impl<T: Tag, P> Question<T, P> {
    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&'static Choice<P>> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Check whether `id` names one of this question's options.
    #[must_use]
    pub fn has_option(&self, id: &str) -> bool {
        self.option(id).is_some()
    }

    fn view(&self, instrument: Instrument) -> QuestionView {
        QuestionView {
            instrument,
            id: self.id,
            heading: self.heading,
            prompt: self.prompt,
            tag: self.tag.as_str(),
            options: self
                .options
                .iter()
                .map(|o| ChoiceView {
                    id: o.id,
                    text: o.text,
                })
                .collect(),
            explanation: self.explanation,
        }
    }
}

// =============================================================================
// PRESENTATION VIEWS
// =============================================================================

/// Payload-free view of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub id: &'static str,
    pub text: &'static str,
}

/// Payload-free view of a question, uniform across instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub instrument: Instrument,
    pub id: &'static str,
    pub heading: Option<&'static str>,
    pub prompt: &'static str,
    pub tag: &'static str,
    pub options: Vec<ChoiceView>,
    pub explanation: Option<&'static str>,
}

// =============================================================================
// QUESTION BANK
// =============================================================================

/// The three instrument banks.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    psychometric: &'static [PsychometricQuestion],
    technical: &'static [TechnicalQuestion],
    wiscar: &'static [WiscarQuestion],
}

static STANDARD: QuestionBank = QuestionBank::new(
    standard::PSYCHOMETRIC,
    standard::TECHNICAL,
    standard::WISCAR,
);

impl QuestionBank {
    /// Build a bank from static question slices.
    ///
    /// Call [`QuestionBank::validate`] on custom banks before use.
    #[must_use]
    pub const fn new(
        psychometric: &'static [PsychometricQuestion],
        technical: &'static [TechnicalQuestion],
        wiscar: &'static [WiscarQuestion],
    ) -> Self {
        Self {
            psychometric,
            technical,
            wiscar,
        }
    }

    /// The interior design career bank.
    #[must_use]
    pub fn standard() -> &'static QuestionBank {
        &STANDARD
    }

    #[must_use]
    pub fn psychometric(&self) -> &'static [PsychometricQuestion] {
        self.psychometric
    }

    #[must_use]
    pub fn technical(&self) -> &'static [TechnicalQuestion] {
        self.technical
    }

    #[must_use]
    pub fn wiscar(&self) -> &'static [WiscarQuestion] {
        self.wiscar
    }

    /// Number of questions in an instrument.
    #[must_use]
    pub fn len(&self, instrument: Instrument) -> usize {
        match instrument {
            Instrument::Psychometric => self.psychometric.len(),
            Instrument::Technical => self.technical.len(),
            Instrument::Wiscar => self.wiscar.len(),
        }
    }

    /// Ordered, payload-free questions of an instrument.
    #[must_use]
    pub fn questions_for(&self, instrument: Instrument) -> Vec<QuestionView> {
        match instrument {
            Instrument::Psychometric => views(self.psychometric, instrument),
            Instrument::Technical => views(self.technical, instrument),
            Instrument::Wiscar => views(self.wiscar, instrument),
        }
    }

    /// The question at `index` within an instrument.
    #[must_use]
    pub fn question_at(&self, instrument: Instrument, index: usize) -> Option<QuestionView> {
        match instrument {
            Instrument::Psychometric => self.psychometric.get(index).map(|q| q.view(instrument)),
            Instrument::Technical => self.technical.get(index).map(|q| q.view(instrument)),
            Instrument::Wiscar => self.wiscar.get(index).map(|q| q.view(instrument)),
        }
    }

    /// Ordered question ids of an instrument.
    #[must_use]
    pub fn question_ids(&self, instrument: Instrument) -> Vec<&'static str> {
        match instrument {
            Instrument::Psychometric => self.psychometric.iter().map(|q| q.id).collect(),
            Instrument::Technical => self.technical.iter().map(|q| q.id).collect(),
            Instrument::Wiscar => self.wiscar.iter().map(|q| q.id).collect(),
        }
    }

    /// Check whether a question id belongs to an instrument.
    #[must_use]
    pub fn contains_question(&self, instrument: Instrument, question_id: &str) -> bool {
        self.question_ids(instrument).contains(&question_id)
    }

    /// Check that `option_id` is an option of `question_id` in `instrument`.
    ///
    /// Returns `UnknownQuestion` or `InvalidOption` otherwise.
    pub fn validate_option(
        &self,
        instrument: Instrument,
        question_id: &str,
        option_id: &str,
    ) -> Result<(), AssessmentError> {
        let has_option = match instrument {
            Instrument::Psychometric => find(self.psychometric, question_id).map(|q| q.has_option(option_id)),
            Instrument::Technical => find(self.technical, question_id).map(|q| q.has_option(option_id)),
            Instrument::Wiscar => find(self.wiscar, question_id).map(|q| q.has_option(option_id)),
        };

        match has_option {
            None => Err(AssessmentError::UnknownQuestion {
                instrument,
                question: question_id.to_string(),
            }),
            Some(false) => Err(AssessmentError::InvalidOption {
                question: question_id.to_string(),
                option: option_id.to_string(),
            }),
            Some(true) => Ok(()),
        }
    }

    /// Check the structural invariants of all three banks.
    ///
    /// - Every bank is non-empty
    /// - Question ids are unique within a bank, option ids within a question
    /// - Every question has at least two options
    /// - Point values lie in `MIN_OPTION_POINTS..=MAX_OPTION_POINTS`
    /// - Every technical question has exactly one correct option
    pub fn validate(&self) -> Result<(), BankError> {
        check_structure(self.psychometric, Instrument::Psychometric)?;
        check_structure(self.technical, Instrument::Technical)?;
        check_structure(self.wiscar, Instrument::Wiscar)?;

        for q in self.psychometric {
            check_points(q)?;
        }
        for q in self.wiscar {
            check_points(q)?;
        }
        for q in self.technical {
            let found = q.options.iter().filter(|o| o.payload).count();
            if found != 1 {
                return Err(BankError::CorrectOptionCount {
                    question: q.id,
                    found,
                });
            }
        }

        Ok(())
    }
}

fn views<T: Tag, P>(questions: &[Question<T, P>], instrument: Instrument) -> Vec<QuestionView> {
    questions.iter().map(|q| q.view(instrument)).collect()
}

fn find<'a, T, P>(questions: &'a [Question<T, P>], id: &str) -> Option<&'a Question<T, P>> {
    questions.iter().find(|q| q.id == id)
}

fn check_structure<T, P>(
    questions: &[Question<T, P>],
    instrument: Instrument,
) -> Result<(), BankError> {
    if questions.is_empty() {
        return Err(BankError::Empty(instrument));
    }

    let mut seen = BTreeSet::new();
    for q in questions {
        if !seen.insert(q.id) {
            return Err(BankError::DuplicateQuestion {
                instrument,
                question: q.id,
            });
        }
        if q.options.len() < 2 {
            return Err(BankError::TooFewOptions {
                instrument,
                question: q.id,
            });
        }
        let mut option_ids = BTreeSet::new();
        for o in q.options {
            if !option_ids.insert(o.id) {
                return Err(BankError::DuplicateOption {
                    question: q.id,
                    option: o.id,
                });
            }
        }
    }

    Ok(())
}

fn check_points<T>(question: &Question<T, u8>) -> Result<(), BankError> {
    for o in question.options {
        if !(MIN_OPTION_POINTS..=MAX_OPTION_POINTS).contains(&o.payload) {
            return Err(BankError::PointsOutOfRange {
                question: question.id,
                option: o.id,
                points: o.payload,
                max: MAX_OPTION_POINTS,
            });
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

//! # Answer Store
//!
//! Question id → chosen option id, for one instrument of one session.
//!
//! - At most one answer per question (re-recording overwrites)
//! - An answer always references an option of its question
//! - A rejected `record_answer` leaves the store untouched

use crate::{AssessmentError, Instrument, QuestionBank};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers recorded for a single instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStore {
    instrument: Instrument,
    /// BTreeMap for deterministic iteration.
    answers: BTreeMap<String, String>,
}

impl AnswerStore {
    /// Create an empty store for an instrument.
    #[must_use]
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            answers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Record (or overwrite) the answer to a question.
    ///
    /// Validates against `bank` first: `UnknownQuestion` if the question is not
    /// part of this store's instrument, `InvalidOption` if the option is not
    /// one of the question's options. Returns the previously recorded option.
    pub fn record_answer(
        &mut self,
        bank: &QuestionBank,
        question_id: &str,
        option_id: &str,
    ) -> Result<Option<String>, AssessmentError> {
        bank.validate_option(self.instrument, question_id, option_id)?;
        Ok(self
            .answers
            .insert(question_id.to_string(), option_id.to_string()))
    }

    /// The option recorded for a question, if any.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// True iff every question of the instrument has an answer.
    #[must_use]
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.question_ids(self.instrument)
            .iter()
            .all(|id| self.answers.contains_key(*id))
    }

    /// Number of recorded answers.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Drop every recorded answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Iterate `(question_id, option_id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(q, o)| (q.as_str(), o.as_str()))
    }

    /// Ensure every question is answered, reporting the shortfall otherwise.
    pub fn require_complete(&self, bank: &QuestionBank) -> Result<(), AssessmentError> {
        if self.is_complete(bank) {
            return Ok(());
        }
        let answered = bank
            .question_ids(self.instrument)
            .iter()
            .filter(|id| self.answers.contains_key(**id))
            .count();
        Err(AssessmentError::IncompleteInstrument {
            instrument: self.instrument,
            answered,
            total: bank.len(self.instrument),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Scoring Module
//!
//! Pure folds from an [`AnswerStore`] over a [`QuestionBank`] into per-tag
//! buckets and an instrument percentage.
//!
//! - Bucket maxima come from the bank, never from the number of answers, so an
//!   empty store scores 0 everywhere and no denominator depends on input
//! - Every tag variant has a bucket, even when no question carries it
//! - Percentages are rounded once, from raw totals (ties away from zero)

use crate::bank::Question;
use crate::primitives::{MAX_OPTION_POINTS, percent, round_div};
use crate::{AnswerStore, Category, Dimension, Instrument, QuestionBank, SkillType, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// BUCKET
// =============================================================================

/// Accumulated score for one tag.
///
/// `earned` is points (Psychometric, WISCAR) or correct answers (Technical);
/// `max` is the highest value `earned` can reach with the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bucket {
    pub earned: u32,
    pub max: u32,
}

impl Bucket {
    /// Rounded percentage of `earned` over `max` (0 if `max` is 0).
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.earned, self.max)
    }

    #[must_use]
    fn merge(self, other: Bucket) -> Bucket {
        Bucket {
            earned: self.earned.saturating_add(other.earned),
            max: self.max.saturating_add(other.max),
        }
    }
}

fn sum_buckets<T>(buckets: &BTreeMap<T, Bucket>) -> Bucket {
    buckets
        .values()
        .fold(Bucket::default(), |acc, b| acc.merge(*b))
}

/// Fold the answered options of `questions` into one bucket per tag.
///
/// `max_of` gives the ceiling a question adds to its bucket, `earned_of` the
/// value of the chosen option. Answers whose option no longer resolves are
/// skipped.
fn fold<T: Tag, P>(
    questions: &[Question<T, P>],
    answers: &AnswerStore,
    max_of: impl Fn(&Question<T, P>) -> u32,
    earned_of: impl Fn(&P) -> u32,
) -> BTreeMap<T, Bucket> {
    let mut buckets: BTreeMap<T, Bucket> =
        T::ALL.iter().map(|t| (*t, Bucket::default())).collect();

    for question in questions {
        let bucket = buckets.entry(question.tag).or_default();
        bucket.max = bucket.max.saturating_add(max_of(question));

        let chosen = answers
            .answer_for(question.id)
            .and_then(|option_id| question.option(option_id));
        if let Some(choice) = chosen {
            bucket.earned = bucket.earned.saturating_add(earned_of(&choice.payload));
        }
    }

    buckets
}

/// An answer store only contributes to the instrument it was created for.
fn answers_for(answers: &AnswerStore, instrument: Instrument) -> AnswerStore {
    if answers.instrument() == instrument {
        answers.clone()
    } else {
        AnswerStore::new(instrument)
    }
}

// =============================================================================
// PSYCHOMETRIC
// =============================================================================

/// Psychometric result: points per category plus overall percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychometricResult {
    categories: BTreeMap<Category, Bucket>,
    percentage: u8,
}

impl PsychometricResult {
    /// Build a result from category buckets; the percentage is derived.
    #[must_use]
    pub fn from_buckets(categories: BTreeMap<Category, Bucket>) -> Self {
        let percentage = sum_buckets(&categories).percent();
        Self {
            categories,
            percentage,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Bucket for one category (empty bucket if absent).
    #[must_use]
    pub fn category(&self, category: Category) -> Bucket {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeMap<Category, Bucket> {
        &self.categories
    }

    /// Sum of all category buckets.
    #[must_use]
    pub fn total(&self) -> Bucket {
        sum_buckets(&self.categories)
    }
}

/// Score the psychometric instrument.
///
/// Each category's max is `MAX_OPTION_POINTS` per question tagged with it.
/// Overall = round(total points / (questions × 5) × 100).
#[must_use]
pub fn score_psychometric(bank: &QuestionBank, answers: &AnswerStore) -> PsychometricResult {
    let answers = answers_for(answers, Instrument::Psychometric);
    let buckets = fold(
        bank.psychometric(),
        &answers,
        |_| u32::from(MAX_OPTION_POINTS),
        |points| u32::from(*points),
    );
    PsychometricResult::from_buckets(buckets)
}

// =============================================================================
// TECHNICAL
// =============================================================================

/// Technical result: correct answers per skill type plus overall percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalResult {
    skills: BTreeMap<SkillType, Bucket>,
    percentage: u8,
}

impl TechnicalResult {
    /// Build a result from skill buckets; the percentage is derived.
    #[must_use]
    pub fn from_buckets(skills: BTreeMap<SkillType, Bucket>) -> Self {
        let percentage = sum_buckets(&skills).percent();
        Self { skills, percentage }
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// `earned` = correct answers, `max` = questions of that type.
    #[must_use]
    pub fn skill(&self, skill: SkillType) -> Bucket {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn skills(&self) -> &BTreeMap<SkillType, Bucket> {
        &self.skills
    }

    /// Total correct answers.
    #[must_use]
    pub fn correct(&self) -> u32 {
        sum_buckets(&self.skills).earned
    }

    /// Total number of questions.
    #[must_use]
    pub fn question_count(&self) -> u32 {
        sum_buckets(&self.skills).max
    }
}

/// Score the technical instrument.
///
/// Overall = round(correct / questions × 100).
#[must_use]
pub fn score_technical(bank: &QuestionBank, answers: &AnswerStore) -> TechnicalResult {
    let answers = answers_for(answers, Instrument::Technical);
    let buckets = fold(
        bank.technical(),
        &answers,
        |_| 1,
        |correct| u32::from(*correct),
    );
    TechnicalResult::from_buckets(buckets)
}

// =============================================================================
// WISCAR
// =============================================================================

/// WISCAR result: points per dimension plus overall percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarResult {
    dimensions: BTreeMap<Dimension, Bucket>,
    percentage: u8,
}

impl WiscarResult {
    /// Build a result from dimension buckets; the percentage is derived.
    #[must_use]
    pub fn from_buckets(dimensions: BTreeMap<Dimension, Bucket>) -> Self {
        let percentage = sum_buckets(&dimensions).percent();
        Self {
            dimensions,
            percentage,
        }
    }

    /// Overall = round(sum of dimension points / sum of dimension maxima × 100).
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> Bucket {
        self.dimensions.get(&dimension).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn dimensions(&self) -> &BTreeMap<Dimension, Bucket> {
        &self.dimensions
    }

    /// Rounded percentage of one dimension.
    #[must_use]
    pub fn dimension_percent(&self, dimension: Dimension) -> u8 {
        self.dimension(dimension).percent()
    }

    /// Rounded percentage of every dimension.
    #[must_use]
    pub fn percentages(&self) -> BTreeMap<Dimension, u8> {
        Dimension::ALL
            .iter()
            .map(|d| (*d, self.dimension_percent(*d)))
            .collect()
    }

    /// Unweighted mean of the six dimension percentages as an exact fraction
    /// `(numerator, denominator)`, before any rounding.
    ///
    /// Dimensions without questions count as 0%.
    #[must_use]
    pub fn mean_fraction(&self) -> (u64, u64) {
        let common = Dimension::ALL
            .iter()
            .map(|d| u64::from(self.dimension(*d).max))
            .filter(|max| *max > 0)
            .fold(1, lcm);

        let numerator = Dimension::ALL
            .iter()
            .map(|d| self.dimension(*d))
            .filter(|b| b.max > 0)
            .map(|b| {
                u64::from(b.earned)
                    .saturating_mul(100)
                    .saturating_mul(common / u64::from(b.max))
            })
            .fold(0u64, u64::saturating_add);

        (numerator, common.saturating_mul(Dimension::ALL.len() as u64))
    }

    /// Mean of the dimension percentages, rounded once.
    #[must_use]
    pub fn mean_percent(&self) -> u8 {
        let (numerator, denominator) = self.mean_fraction();
        round_div(numerator, denominator).min(100) as u8
    }
}

/// Score the WISCAR instrument.
#[must_use]
pub fn score_wiscar(bank: &QuestionBank, answers: &AnswerStore) -> WiscarResult {
    let answers = answers_for(answers, Instrument::Wiscar);
    let buckets = fold(
        bank.wiscar(),
        &answers,
        |_| u32::from(MAX_OPTION_POINTS),
        |points| u32::from(*points),
    );
    WiscarResult::from_buckets(buckets)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).saturating_mul(b)
}

// =============================================================================
// TESTS
// =============================================================================

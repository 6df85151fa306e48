//! # Stage Sequencer
//!
//! The linear state machine that orders the assessment:
//!
//! | Stage        | Accepts                      | Moves to     |
//! |--------------|------------------------------|--------------|
//! | Intro        | `Start`                      | Psychometric |
//! | Psychometric | `PsychometricCompleted(..)`  | Technical    |
//! | Technical    | `TechnicalCompleted(..)`     | Wiscar       |
//! | Wiscar       | `WiscarCompleted(..)`        | Results      |
//! | Results      | nothing (terminal)           | -            |
//!
//! Completion events carry the finished instrument result, so a transition
//! cannot be requested without the data it needs. Any event that does not
//! match the current stage is rejected with `OutOfSequenceTransition` and the
//! state is left unchanged.

use crate::{
    AggregateResult, AssessmentError, Instrument, PsychometricResult, TechnicalResult,
    WiscarResult,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// STAGE ENUM
// =============================================================================

/// Stages of an assessment session, in order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Intro,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Intro,
        Stage::Psychometric,
        Stage::Technical,
        Stage::Wiscar,
        Stage::Results,
    ];

    /// Get the stage name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Intro => "Introduction",
            Stage::Psychometric => "Psychological Fit",
            Stage::Technical => "Technical Aptitude",
            Stage::Wiscar => "WISCAR Analysis",
            Stage::Results => "Results",
        }
    }

    /// The instrument answered during this stage, if any.
    #[must_use]
    pub fn instrument(&self) -> Option<Instrument> {
        match self {
            Stage::Psychometric => Some(Instrument::Psychometric),
            Stage::Technical => Some(Instrument::Technical),
            Stage::Wiscar => Some(Instrument::Wiscar),
            Stage::Intro | Stage::Results => None,
        }
    }

    /// Get the next stage, if any.
    #[must_use]
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Intro => Some(Stage::Psychometric),
            Stage::Psychometric => Some(Stage::Technical),
            Stage::Technical => Some(Stage::Wiscar),
            Stage::Wiscar => Some(Stage::Results),
            Stage::Results => None,
        }
    }

    /// Check if this stage is terminal (Results).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Results)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// STAGE EVENTS
// =============================================================================

/// Signals that drive the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// Leave the introduction.
    Start,
    PsychometricCompleted(PsychometricResult),
    TechnicalCompleted(TechnicalResult),
    /// Carries the six-dimension WISCAR result.
    WiscarCompleted(WiscarResult),
}

impl StageEvent {
    /// Short name used in error reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StageEvent::Start => "start",
            StageEvent::PsychometricCompleted(_) => "psychometric-completed",
            StageEvent::TechnicalCompleted(_) => "technical-completed",
            StageEvent::WiscarCompleted(_) => "wiscar-completed",
        }
    }
}

// =============================================================================
// SEQUENCER
// =============================================================================

/// Tracks the current stage and the results carried forward from finished
/// stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequencer {
    stage: Stage,
    psychometric: Option<PsychometricResult>,
    technical: Option<TechnicalResult>,
    wiscar: Option<WiscarResult>,
}

impl Sequencer {
    /// Create a sequencer in `Intro`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Apply an event, returning the new stage.
    ///
    /// Rejected events leave the sequencer untouched.
    pub fn apply(&mut self, event: StageEvent) -> Result<Stage, AssessmentError> {
        let next = match (self.stage, event) {
            (Stage::Intro, StageEvent::Start) => Stage::Psychometric,
            (Stage::Psychometric, StageEvent::PsychometricCompleted(result)) => {
                self.psychometric = Some(result);
                Stage::Technical
            }
            (Stage::Technical, StageEvent::TechnicalCompleted(result)) => {
                self.technical = Some(result);
                Stage::Wiscar
            }
            (Stage::Wiscar, StageEvent::WiscarCompleted(result)) => {
                self.wiscar = Some(result);
                Stage::Results
            }
            (from, event) => {
                return Err(AssessmentError::OutOfSequenceTransition {
                    from,
                    event: event.name(),
                });
            }
        };

        self.stage = next;
        Ok(next)
    }

    #[must_use]
    pub fn psychometric(&self) -> Option<&PsychometricResult> {
        self.psychometric.as_ref()
    }

    #[must_use]
    pub fn technical(&self) -> Option<&TechnicalResult> {
        self.technical.as_ref()
    }

    #[must_use]
    pub fn wiscar(&self) -> Option<&WiscarResult> {
        self.wiscar.as_ref()
    }

    /// The aggregate result, available only in `Results`.
    #[must_use]
    pub fn aggregate(&self) -> Option<AggregateResult> {
        if !self.stage.is_terminal() {
            return None;
        }
        match (&self.psychometric, &self.technical, &self.wiscar) {
            (Some(p), Some(t), Some(w)) => Some(AggregateResult::compute(p, t, w)),
            _ => None,
        }
    }

    /// Discard all carried results and return to `Intro`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AnswerStore, QuestionBank, score_psychometric, score_technical, score_wiscar,
    };

    fn bank() -> &'static QuestionBank {
        QuestionBank::standard()
    }

    fn psy() -> PsychometricResult {
        score_psychometric(bank(), &AnswerStore::new(Instrument::Psychometric))
    }

    fn tech() -> TechnicalResult {
        score_technical(bank(), &AnswerStore::new(Instrument::Technical))
    }

    fn wiscar() -> WiscarResult {
        score_wiscar(bank(), &AnswerStore::new(Instrument::Wiscar))
    }

    #[test]
    fn stage_ordering() {
        assert!(Stage::Intro < Stage::Psychometric);
        assert!(Stage::Psychometric < Stage::Technical);
        assert!(Stage::Technical < Stage::Wiscar);
        assert!(Stage::Wiscar < Stage::Results);
    }

    #[test]
    fn next_walks_the_chain() {
        let mut stage = Stage::Intro;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            visited.push(next);
            stage = next;
        }
        assert_eq!(visited, Stage::ALL.to_vec());
        assert!(stage.is_terminal());
    }

    #[test]
    fn from_intro_only_start_is_accepted() {
        let mut seq = Sequencer::new();
        for event in [
            StageEvent::PsychometricCompleted(psy()),
            StageEvent::TechnicalCompleted(tech()),
            StageEvent::WiscarCompleted(wiscar()),
        ] {
            assert!(matches!(
                seq.apply(event),
                Err(AssessmentError::OutOfSequenceTransition {
                    from: Stage::Intro,
                    ..
                })
            ));
            assert_eq!(seq.stage(), Stage::Intro);
        }
        assert_eq!(seq.apply(StageEvent::Start), Ok(Stage::Psychometric));
    }

    #[test]
    fn full_walk_reaches_results() {
        let mut seq = Sequencer::new();
        seq.apply(StageEvent::Start).expect("start");
        seq.apply(StageEvent::PsychometricCompleted(psy()))
            .expect("psychometric");
        assert!(seq.aggregate().is_none());
        seq.apply(StageEvent::TechnicalCompleted(tech()))
            .expect("technical");
        seq.apply(StageEvent::WiscarCompleted(wiscar()))
            .expect("wiscar");

        assert_eq!(seq.stage(), Stage::Results);
        assert!(seq.aggregate().is_some());
    }

    #[test]
    fn skipping_a_stage_is_rejected() {
        let mut seq = Sequencer::new();
        seq.apply(StageEvent::Start).expect("start");
        let err = seq
            .apply(StageEvent::TechnicalCompleted(tech()))
            .expect_err("skip");
        assert_eq!(
            err,
            AssessmentError::OutOfSequenceTransition {
                from: Stage::Psychometric,
                event: "technical-completed",
            }
        );
        assert_eq!(seq.stage(), Stage::Psychometric);
        assert!(seq.technical().is_none());
    }

    #[test]
    fn re_entering_intro_is_rejected() {
        let mut seq = Sequencer::new();
        seq.apply(StageEvent::Start).expect("start");
        assert!(seq.apply(StageEvent::Start).is_err());
        assert_eq!(seq.stage(), Stage::Psychometric);
    }

    #[test]
    fn results_is_terminal() {
        let mut seq = Sequencer::new();
        seq.apply(StageEvent::Start).expect("start");
        seq.apply(StageEvent::PsychometricCompleted(psy())).expect("p");
        seq.apply(StageEvent::TechnicalCompleted(tech())).expect("t");
        seq.apply(StageEvent::WiscarCompleted(wiscar())).expect("w");

        assert!(seq.apply(StageEvent::Start).is_err());
        assert!(seq.apply(StageEvent::WiscarCompleted(wiscar())).is_err());
        assert_eq!(seq.stage(), Stage::Results);
    }

    #[test]
    fn reset_discards_results() {
        let mut seq = Sequencer::new();
        seq.apply(StageEvent::Start).expect("start");
        seq.apply(StageEvent::PsychometricCompleted(psy())).expect("p");
        seq.reset();
        assert_eq!(seq, Sequencer::new());
    }

    #[test]
    fn stage_display() {
        assert_eq!(format!("{}", Stage::Wiscar), "WISCAR Analysis");
        assert_eq!(Stage::Technical.instrument(), Some(Instrument::Technical));
        assert_eq!(Stage::Results.instrument(), None);
    }
}

//! # Session
//!
//! One assessment run: the three answer stores, the question cursor inside
//! the active instrument, and the stage sequencer.
//!
//! The session is the only mutable object in the engine. It is single-owner
//! and synchronous; restarting discards every answer and result.
//!
//! ```text
//! start() -> record_answer()/advance()/previous() ... -> Results -> report()
//! ```

use crate::{
    AggregateResult, AnswerStore, AssessmentError, Insights, Instrument, PsychometricResult,
    QuestionBank, QuestionView, Recommendation, Sequencer, Stage, StageEvent, TechnicalResult,
    WiscarResult, primitives, score_psychometric, score_technical, score_wiscar,
};
use serde::Serialize;

// =============================================================================
// TYPES
// =============================================================================

/// Outcome of [`Session::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to the next question of the same instrument.
    NextQuestion,
    /// The instrument was scored and the session entered the given stage.
    StageCompleted(Stage),
}

/// Position of the cursor inside the active instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based index of the current question.
    pub position: usize,
    pub total: usize,
    /// `(position + 1) / total`, rounded.
    pub percent: u8,
}

/// Everything the results view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub aggregate: AggregateResult,
    pub psychometric: PsychometricResult,
    pub technical: TechnicalResult,
    pub wiscar: WiscarResult,
    pub recommendation: Recommendation,
    pub insights: Insights,
}

// =============================================================================
// SESSION
// =============================================================================

/// A single assessment run over a question bank.
#[derive(Debug, Clone)]
pub struct Session<'b> {
    bank: &'b QuestionBank,
    sequencer: Sequencer,
    psychometric: AnswerStore,
    technical: AnswerStore,
    wiscar: AnswerStore,
    cursor: usize,
}

impl<'b> Session<'b> {
    /// Create a session in `Intro`.
    #[must_use]
    pub fn new(bank: &'b QuestionBank) -> Self {
        Self {
            bank,
            sequencer: Sequencer::new(),
            psychometric: AnswerStore::new(Instrument::Psychometric),
            technical: AnswerStore::new(Instrument::Technical),
            wiscar: AnswerStore::new(Instrument::Wiscar),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &'b QuestionBank {
        self.bank
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.sequencer.stage()
    }

    /// Leave `Intro` and begin the psychometric instrument.
    pub fn start(&mut self) -> Result<Stage, AssessmentError> {
        let stage = self.sequencer.apply(StageEvent::Start)?;
        self.cursor = 0;
        Ok(stage)
    }

    /// The instrument answered in the current stage.
    pub fn active_instrument(&self) -> Result<Instrument, AssessmentError> {
        let stage = self.stage();
        stage
            .instrument()
            .ok_or(AssessmentError::NotInInstrument { stage })
    }

    /// Answers recorded so far for an instrument.
    #[must_use]
    pub fn answers(&self, instrument: Instrument) -> &AnswerStore {
        match instrument {
            Instrument::Psychometric => &self.psychometric,
            Instrument::Technical => &self.technical,
            Instrument::Wiscar => &self.wiscar,
        }
    }

    fn answers_mut(&mut self, instrument: Instrument) -> &mut AnswerStore {
        match instrument {
            Instrument::Psychometric => &mut self.psychometric,
            Instrument::Technical => &mut self.technical,
            Instrument::Wiscar => &mut self.wiscar,
        }
    }

    // =========================================================================
    // QUESTION CURSOR
    // =========================================================================

    /// The question under the cursor (None outside an instrument stage).
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView> {
        let instrument = self.stage().instrument()?;
        self.bank.question_at(instrument, self.cursor)
    }

    /// The option recorded for the current question.
    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        let instrument = self.stage().instrument()?;
        let question = self.bank.question_ids(instrument).get(self.cursor).copied()?;
        self.answers(instrument).answer_for(question)
    }

    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let instrument = self.stage().instrument()?;
        let total = self.bank.len(instrument);
        let percent = primitives::percent(
            u32::try_from(self.cursor.saturating_add(1)).unwrap_or(u32::MAX),
            u32::try_from(total).unwrap_or(u32::MAX),
        );
        Some(Progress {
            position: self.cursor,
            total,
            percent,
        })
    }

    /// Record an answer for any question of the active instrument.
    ///
    /// Returns the previously recorded option, if any.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        option_id: &str,
    ) -> Result<Option<String>, AssessmentError> {
        let instrument = self.active_instrument()?;
        let bank = self.bank;
        self.answers_mut(instrument)
            .record_answer(bank, question_id, option_id)
    }

    /// Move forward.
    ///
    /// Before the last question this only moves the cursor, and requires the
    /// current question to be answered. On the last question the whole
    /// instrument must be complete; it is then scored, handed to the
    /// sequencer and the cursor resets for the next stage.
    pub fn advance(&mut self) -> Result<Advance, AssessmentError> {
        let instrument = self.active_instrument()?;
        let store = self.answers(instrument);
        let total = self.bank.len(instrument);

        if !self.is_current_answered() {
            return Err(AssessmentError::IncompleteInstrument {
                instrument,
                answered: store.answered_count(),
                total,
            });
        }

        if self.cursor.saturating_add(1) < total {
            self.cursor += 1;
            return Ok(Advance::NextQuestion);
        }

        store.require_complete(self.bank)?;
        let event = match instrument {
            Instrument::Psychometric => {
                StageEvent::PsychometricCompleted(score_psychometric(self.bank, store))
            }
            Instrument::Technical => {
                StageEvent::TechnicalCompleted(score_technical(self.bank, store))
            }
            Instrument::Wiscar => StageEvent::WiscarCompleted(score_wiscar(self.bank, store)),
        };
        let next = self.sequencer.apply(event)?;
        self.cursor = 0;
        Ok(Advance::StageCompleted(next))
    }

    /// Move the cursor back one question. Returns false at the first
    /// question, where nothing changes.
    pub fn previous(&mut self) -> Result<bool, AssessmentError> {
        self.active_instrument()?;
        if self.cursor == 0 {
            return Ok(false);
        }
        self.cursor -= 1;
        Ok(true)
    }

    /// Discard every answer and result and return to `Intro`.
    pub fn restart(&mut self) {
        self.sequencer.reset();
        self.psychometric.clear();
        self.technical.clear();
        self.wiscar.clear();
        self.cursor = 0;
    }

    // =========================================================================
    // RESULTS
    // =========================================================================

    /// The full report, available once the session reaches `Results`.
    #[must_use]
    pub fn report(&self) -> Option<AssessmentReport> {
        let aggregate = self.sequencer.aggregate()?;
        let psychometric = self.sequencer.psychometric()?.clone();
        let technical = self.sequencer.technical()?.clone();
        let wiscar = self.sequencer.wiscar()?.clone();

        Some(AssessmentReport {
            aggregate,
            recommendation: Recommendation::new(&aggregate, &wiscar),
            insights: Insights::collect(&psychometric, &technical, &wiscar),
            psychometric,
            technical,
            wiscar,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tier;

    fn session() -> Session<'static> {
        Session::new(QuestionBank::standard())
    }

    /// Answer every question of the active instrument with `option`.
    fn finish_instrument(session: &mut Session<'_>, option: &str) -> Advance {
        loop {
            let question = session.current_question().expect("question");
            session.record_answer(question.id, option).expect("record");
            match session.advance().expect("advance") {
                Advance::NextQuestion => continue,
                done => return done,
            }
        }
    }

    #[test]
    fn new_session_is_in_intro() {
        let s = session();
        assert_eq!(s.stage(), Stage::Intro);
        assert!(s.current_question().is_none());
        assert!(s.progress().is_none());
        assert!(s.report().is_none());
    }

    #[test]
    fn answering_in_intro_is_rejected() {
        let mut s = session();
        assert_eq!(
            s.record_answer("q1", "a"),
            Err(AssessmentError::NotInInstrument {
                stage: Stage::Intro
            })
        );
        assert!(s.advance().is_err());
        assert!(s.previous().is_err());
    }

    #[test]
    fn start_shows_first_question() {
        let mut s = session();
        assert_eq!(s.start(), Ok(Stage::Psychometric));
        let q = s.current_question().expect("question");
        assert_eq!(q.id, "q1");
        assert_eq!(
            s.progress(),
            Some(Progress {
                position: 0,
                total: 8,
                percent: 13,
            })
        );
    }

    #[test]
    fn advance_requires_current_answer() {
        let mut s = session();
        s.start().expect("start");
        assert_eq!(
            s.advance(),
            Err(AssessmentError::IncompleteInstrument {
                instrument: Instrument::Psychometric,
                answered: 0,
                total: 8,
            })
        );
        assert_eq!(s.progress().map(|p| p.position), Some(0));
    }

    #[test]
    fn previous_at_first_question_is_noop() {
        let mut s = session();
        s.start().expect("start");
        assert_eq!(s.previous(), Ok(false));

        s.record_answer("q1", "b").expect("record");
        s.advance().expect("advance");
        assert_eq!(s.current_question().map(|q| q.id), Some("q2"));
        assert_eq!(s.previous(), Ok(true));
        assert_eq!(s.current_answer(), Some("b"));
    }

    #[test]
    fn answers_to_other_instruments_are_rejected() {
        let mut s = session();
        s.start().expect("start");
        assert!(matches!(
            s.record_answer("t1", "a"),
            Err(AssessmentError::UnknownQuestion { .. })
        ));
        assert!(matches!(
            s.record_answer("q1", "z"),
            Err(AssessmentError::InvalidOption { .. })
        ));
    }

    #[test]
    fn answers_may_be_recorded_ahead_of_the_cursor() {
        let mut s = session();
        s.start().expect("start");
        for id in ["q8", "q7", "q6", "q5", "q4", "q3", "q2", "q1"] {
            s.record_answer(id, "c").expect("record");
        }
        let mut steps = 0;
        while s.advance().expect("advance") == Advance::NextQuestion {
            steps += 1;
        }
        assert_eq!(steps, 7);
        assert_eq!(s.stage(), Stage::Technical);
        assert_eq!(s.progress().map(|p| p.position), Some(0));
    }

    #[test]
    fn answering_out_of_order_still_needs_completion() {
        let mut s = session();
        s.start().expect("start");
        for id in ["q1", "q2", "q3", "q4", "q5", "q6", "q7"] {
            s.record_answer(id, "a").expect("record");
            s.advance().expect("advance");
        }
        // The cursor sits on the only unanswered question.
        assert_eq!(s.current_question().map(|q| q.id), Some("q8"));
        assert!(matches!(
            s.advance(),
            Err(AssessmentError::IncompleteInstrument { answered: 7, .. })
        ));
        assert_eq!(s.stage(), Stage::Psychometric);
    }

    #[test]
    fn full_run_top_answers_is_excellent() {
        let mut s = session();
        s.start().expect("start");
        assert_eq!(
            finish_instrument(&mut s, "a"),
            Advance::StageCompleted(Stage::Technical)
        );

        for (q, o) in [
            ("t1", "a"),
            ("t2", "b"),
            ("t3", "c"),
            ("t4", "c"),
            ("t5", "b"),
            ("t6", "c"),
            ("t7", "c"),
            ("t8", "b"),
        ] {
            s.record_answer(q, o).expect("record");
        }
        while s.advance().expect("advance") == Advance::NextQuestion {}
        assert_eq!(s.stage(), Stage::Wiscar);

        assert_eq!(
            finish_instrument(&mut s, "a"),
            Advance::StageCompleted(Stage::Results)
        );

        let report = s.report().expect("report");
        // 0.3 * 95 + 0.3 * 100 + 0.4 * 100 = 98.5
        assert_eq!(report.aggregate.psychometric, 95);
        assert_eq!(report.aggregate.technical, 100);
        assert_eq!(report.aggregate.wiscar, 100);
        assert_eq!(report.aggregate.overall, 99);
        assert_eq!(report.recommendation.tier, Tier::Excellent);
        assert!(s.advance().is_err());
    }

    #[test]
    fn restart_discards_everything() {
        let mut s = session();
        s.start().expect("start");
        finish_instrument(&mut s, "b");
        assert_eq!(s.stage(), Stage::Technical);

        s.restart();
        assert_eq!(s.stage(), Stage::Intro);
        assert!(s.answers(Instrument::Psychometric).is_empty());
        assert!(s.current_question().is_none());
    }

    #[test]
    fn session_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Session<'static>>();
    }
}

//! # designfit-core
//!
//! The scoring and progression engine for the interior design career
//! assessment - THE LOGIC.
//!
//! A session walks three instruments in a fixed order (psychometric fit,
//! technical aptitude, WISCAR), scores each one when it is finished, and
//! combines the results into a weighted readiness score, a recommendation
//! tier and a set of career-path fit flags.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Owns no I/O: the question bank is static, everything else lives in a
//!   caller-owned [`Session`]
//! - Is deterministic: integer arithmetic only, `BTreeMap` only
//! - Never panics on user input: every rejected call returns [`AssessmentError`]
//! - Has NO async, NO network, NO logging dependencies (pure Rust)
//!
//! ## Data Flow
//!
//! ```text
//! answers -> AnswerStore -> scoring -> Sequencer -> AggregateResult -> Recommendation
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod aggregate;
pub mod answers;
pub mod bank;
pub mod insights;
pub mod primitives;
pub mod recommendation;
pub mod scoring;
pub mod session;
pub mod system;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AssessmentError, BankError, Category, Dimension, Instrument, SkillType, Tag,
};

// =============================================================================
// RE-EXPORTS: Question Bank and Answers
// =============================================================================

pub use answers::AnswerStore;
pub use bank::{
    Choice, ChoiceView, PsychometricQuestion, Question, QuestionBank, QuestionView,
    TechnicalQuestion, WiscarQuestion,
};

// =============================================================================
// RE-EXPORTS: Scoring
// =============================================================================

pub use aggregate::AggregateResult;
pub use scoring::{
    Bucket, PsychometricResult, TechnicalResult, WiscarResult, score_psychometric,
    score_technical, score_wiscar,
};

// =============================================================================
// RE-EXPORTS: Recommendation and Insights
// =============================================================================

pub use insights::{Insights, WiscarInsights};
pub use recommendation::{CareerFit, CareerPath, Recommendation, Tier, career_fits, classify};

// =============================================================================
// RE-EXPORTS: Progression (from system and session modules)
// =============================================================================

pub use session::{Advance, AssessmentReport, Progress, Session};
pub use system::{Sequencer, Stage, StageEvent};

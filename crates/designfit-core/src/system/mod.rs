//! # System Module
//!
//! Stage sequencing for an assessment session.
//!
//! The sequencer only knows about stages and completed instrument results.
//! Question-level navigation inside a stage belongs to the session and never
//! changes the sequencer's state.

mod stage;

pub use stage::*;

//! Error types for the quiz engine.
//!
//! Malformed answers are not errors: they are simply wrong. What remains are
//! caller-contract violations on the session and the user-facing validation
//! done before a session starts.

use thiserror::Error;

use crate::quiz_engine::models::SessionPhase;

/// A session operation was called in a phase that does not allow it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {operation} while the session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: SessionPhase,
    },
}

/// Validation failures on the selection and card-count screens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error("select at least one number")]
    EmptySelection,

    #[error("{value} is outside 1..=10")]
    OutOfRange { value: u32 },

    #[error("{input:?} is not a number")]
    NotANumber { input: String },

    #[error("card count must be a whole number greater than zero, got {input:?}")]
    InvalidCardCount { input: String },

    #[error("choose how many cards to play")]
    MissingCardCount,
}

//! # times_drill
//!
//! A multiplication-table flashcard quiz engine.
//!
//! The learner picks which multiplicands to practice (1 to 10) and how many
//! cards to answer. Each card is a random `a × b` question drawn without
//! repeats until every question of the selection has been asked, after which
//! the pool recycles. Answers are checked numerically and tallied; the final
//! summary reports accuracy and a performance tier.
//!
//! ## How it works
//!
//! 1. Build a [`QuizSetup`]: toggle numbers, pick a card count, then
//!    [`QuizSetup::validate`].
//! 2. Start a [`Session`] with the validated setup. The session builds the
//!    question [`Universe`] and draws the first card.
//! 3. Feed each typed answer to [`Session::submit_answer`]. Non-numeric input
//!    is simply wrong, it never errors.
//! 4. When the outcome says `is_last_card`, read a [`QuizSummary`].
//!
//! ## Key features
//!
//! - **Deterministic**: [`Session::with_seed`] replays the exact same
//!   question order, useful for tests and demos.
//! - **No repeats within a cycle**: every question of the selection is asked
//!   once before any question comes back.
//! - **Strict phases**: submitting to an idle or finished session returns
//!   [`SessionError::InvalidState`] and leaves the tallies alone.
//!
//! ## Quick start
//!
//! ```rust
//! use times_drill::{QuizSetup, QuizSummary, Session};
//!
//! let mut setup = QuizSetup::new().with_numbers([3, 7])?;
//! setup.set_card_count(10)?;
//!
//! let mut session = Session::with_seed(42);
//! setup.validate()?.start(&mut session)?;
//!
//! loop {
//!     let question = session.current_question().expect("session is active");
//!     let outcome = session.submit_answer(&question.product.to_string())?;
//!     if outcome.is_last_card {
//!         break;
//!     }
//! }
//!
//! let summary = QuizSummary::from_session(&session);
//! assert_eq!(summary.accuracy_percent, 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod console;
pub mod quiz_engine;

// Convenience re-exports so callers can use `times_drill::Session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    AnswerOutcome, DrawPool, PerformanceTier, Question, QuizSetup, QuizSummary, Session,
    SessionError, SessionPhase, SetupError, Universe, ValidSetup,
};

#[cfg(test)]
mod tests;

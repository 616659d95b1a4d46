//! Core quiz engine: question scheduling, the session state machine, and the
//! setup and results around it.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: questions, answer outcomes, session phases |
//! | `scheduler` | Question universe and the non-repeating random draw |
//! | `session`   | `Session`: start, submit answer, reset |
//! | `setup`     | Number and card-count selection with validation |
//! | `summary`   | Accuracy and performance tier for a finished quiz |
//! | `error`     | `SessionError` and `SetupError` |

pub mod error;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod setup;
pub mod summary;

// Re-export the public API surface so callers can use
// `quiz_engine::Session` without reaching into sub-modules.
pub use error::{SessionError, SetupError};
pub use models::{AnswerOutcome, Question, QuestionKey, SessionPhase, FACTOR_MAX, FACTOR_MIN};
pub use scheduler::{draw, DrawPool, Universe};
pub use session::Session;
pub use setup::{parse_card_count, parse_number, QuizSetup, ValidSetup, CARD_PRESETS};
pub use summary::{PerformanceTier, QuizSummary};

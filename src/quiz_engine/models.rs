use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question primitives
// ---------------------------------------------------------------------------

/// Smallest factor offered by the quiz.
pub const FACTOR_MIN: u8 = 1;
/// Largest factor offered by the quiz.
pub const FACTOR_MAX: u8 = 10;

/// Identity of a question: the ordered `(multiplicand, multiplier)` pair.
/// `(2, 3)` and `(3, 2)` are different questions.
pub type QuestionKey = (u8, u8);

/// One multiplication fact, e.g. `7 × 8 = 56`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub multiplicand: u8,
    pub multiplier: u8,
    pub product: u32,
}

impl Question {
    pub fn new(multiplicand: u8, multiplier: u8) -> Self {
        Question {
            multiplicand,
            multiplier,
            product: u32::from(multiplicand) * u32::from(multiplier),
        }
    }

    pub fn key(&self) -> QuestionKey {
        (self.multiplicand, self.multiplier)
    }

    /// Does `answer` match the product?
    pub fn is_answered_by(&self, answer: u32) -> bool {
        answer == self.product
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.multiplicand, self.multiplier)
    }
}

// ---------------------------------------------------------------------------
// Session metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Active,
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle     => write!(f, "idle"),
            SessionPhase::Active   => write!(f, "active"),
            SessionPhase::Finished => write!(f, "finished"),
        }
    }
}

/// Result of one `submit_answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub was_correct: bool,
    /// The submitted card was the final one; the session is now finished.
    pub is_last_card: bool,
}

//! End-of-quiz results: tallies, accuracy and a performance tier.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Perfect,
    Excellent,
    Good,
    Fair,
    KeepPracticing,
}

impl PerformanceTier {
    pub fn from_accuracy(percent: u32) -> Self {
        match percent {
            100..=u32::MAX => PerformanceTier::Perfect,
            80..=99        => PerformanceTier::Excellent,
            60..=79        => PerformanceTier::Good,
            40..=59        => PerformanceTier::Fair,
            _              => PerformanceTier::KeepPracticing,
        }
    }

    /// Encouragement shown under the results.
    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Perfect        => "Perfect! You know these tables by heart!",
            PerformanceTier::Excellent      => "Excellent! You know almost all of them!",
            PerformanceTier::Good           => "Good job! Keep practicing!",
            PerformanceTier::Fair           => "Not bad! A little more practice will help.",
            PerformanceTier::KeepPracticing => "Keep learning, you'll get there!",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PerformanceTier::Perfect        => "Perfect",
            PerformanceTier::Excellent      => "Excellent",
            PerformanceTier::Good           => "Good",
            PerformanceTier::Fair           => "Fair",
            PerformanceTier::KeepPracticing => "Keep Practicing",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub total_cards: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// `correct / total_cards` as a whole percentage, rounded half up.
    pub accuracy_percent: u32,
    pub tier: PerformanceTier,
}

impl QuizSummary {
    pub fn new(total_cards: u32, correct: u32, incorrect: u32) -> Self {
        let accuracy_percent = accuracy_percent(correct, total_cards);
        QuizSummary {
            total_cards,
            correct,
            incorrect,
            accuracy_percent,
            tier: PerformanceTier::from_accuracy(accuracy_percent),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::new(session.total_cards(), session.correct_count(), session.incorrect_count())
    }
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cards: {}", self.total_cards)?;
        writeln!(f, "Correct:     {}", self.correct)?;
        writeln!(f, "Incorrect:   {}", self.incorrect)?;
        writeln!(f, "Accuracy:    {}%", self.accuracy_percent)?;
        write!(f, "{}", self.tier.message())
    }
}

fn accuracy_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer round-half-up of correct * 100 / total.
    let scaled = u64::from(correct) * 200 + u64::from(total);
    u32::try_from(scaled / (u64::from(total) * 2)).unwrap_or(u32::MAX)
}

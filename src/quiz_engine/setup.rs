//! Pre-quiz choices: which multiplicands to practice and how many cards.
//!
//! [`QuizSetup`] accumulates the learner's picks; [`QuizSetup::validate`]
//! turns them into a [`ValidSetup`] that is safe to hand to
//! [`Session::start`].

use std::collections::BTreeSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{SessionError, SetupError},
    models::{Question, FACTOR_MAX, FACTOR_MIN},
    session::Session,
};

/// Card counts offered as one-tap choices.
pub const CARD_PRESETS: [u32; 3] = [10, 20, 30];

const FACTOR_COUNT: usize = (FACTOR_MAX - FACTOR_MIN + 1) as usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSetup {
    numbers: BTreeSet<u8>,
    card_count: Option<NonZeroU32>,
}

/// A selection and card count that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidSetup {
    pub numbers: Vec<u8>,
    pub total_cards: NonZeroU32,
}

impl QuizSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every number in `numbers`.
    pub fn with_numbers<I>(mut self, numbers: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = u8>,
    {
        for n in numbers {
            self.numbers.insert(check_range(n)?);
        }
        Ok(self)
    }

    /// Replace the selection with `numbers`. On error the old selection stays.
    pub fn replace_selection<I>(&mut self, numbers: I) -> Result<(), SetupError>
    where
        I: IntoIterator<Item = u8>,
    {
        let numbers = numbers
            .into_iter()
            .map(check_range)
            .collect::<Result<BTreeSet<u8>, _>>()?;
        self.numbers = numbers;
        Ok(())
    }

    /// Flip `n` in or out of the selection.
    pub fn toggle(&mut self, n: u8) -> Result<(), SetupError> {
        let n = check_range(n)?;
        if !self.numbers.remove(&n) {
            self.numbers.insert(n);
        }
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.numbers = (FACTOR_MIN..=FACTOR_MAX).collect();
    }

    pub fn deselect_all(&mut self) {
        self.numbers.clear();
    }

    /// Selected numbers, ascending.
    pub fn selected(&self) -> Vec<u8> {
        self.numbers.iter().copied().collect()
    }

    pub fn is_all_selected(&self) -> bool {
        self.numbers.len() == FACTOR_COUNT
    }

    /// Number of distinct questions the current selection yields.
    pub fn question_count(&self) -> usize {
        self.numbers.len() * FACTOR_COUNT
    }

    pub fn set_card_count(&mut self, count: u32) -> Result<(), SetupError> {
        let count = NonZeroU32::new(count).ok_or_else(|| SetupError::InvalidCardCount {
            input: count.to_string(),
        })?;
        self.card_count = Some(count);
        Ok(())
    }

    pub fn card_count(&self) -> Option<NonZeroU32> {
        self.card_count
    }

    pub fn validate(&self) -> Result<ValidSetup, SetupError> {
        if self.numbers.is_empty() {
            return Err(SetupError::EmptySelection);
        }
        let total_cards = self.card_count.ok_or(SetupError::MissingCardCount)?;
        Ok(ValidSetup { numbers: self.selected(), total_cards })
    }
}

impl ValidSetup {
    /// Start `session` with this setup, returning the first question.
    pub fn start(&self, session: &mut Session) -> Result<Question, SessionError> {
        session.start(self.total_cards, &self.numbers)
    }
}

/// Parse a typed-in card count: ASCII digits only, greater than zero.
pub fn parse_card_count(input: &str) -> Result<NonZeroU32, SetupError> {
    let invalid = || SetupError::InvalidCardCount { input: input.to_string() };
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(invalid)
}

/// Parse one typed-in multiplicand.
///
/// Digit strings too large for `1..=10` (including ones past `u32::MAX`,
/// reported as `u32::MAX`) are out of range rather than "not a number".
pub fn parse_number(token: &str) -> Result<u8, SetupError> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SetupError::NotANumber { input: trimmed.to_string() });
    }
    let value = trimmed.parse::<u32>().unwrap_or(u32::MAX);
    u8::try_from(value)
        .map_err(|_| SetupError::OutOfRange { value })
        .and_then(check_range)
}

fn check_range(n: u8) -> Result<u8, SetupError> {
    if (FACTOR_MIN..=FACTOR_MAX).contains(&n) {
        Ok(n)
    } else {
        Err(SetupError::OutOfRange { value: u32::from(n) })
    }
}

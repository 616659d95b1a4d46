//! The quiz session state machine: `Idle → Active → Finished`, back to `Idle`
//! only through [`Session::reset`].
//!
//! The universe and draw pool live inside the session and are never exposed;
//! callers only see the progress accessors.

use std::num::NonZeroU32;

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    error::SessionError,
    models::{AnswerOutcome, Question, SessionPhase},
    scheduler::{self, DrawPool, Universe},
};

/// Questions and used-set for the running session.
#[derive(Debug)]
struct Deck {
    universe: Universe,
    pool: DrawPool,
}

#[derive(Debug)]
pub struct Session {
    rng: StdRng,
    deck: Option<Deck>,
    current_question: Option<Question>,
    card_index: u32,
    correct_count: u32,
    incorrect_count: u32,
    total_cards: u32,
    finished: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Idle session drawing from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Idle session whose question order is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Session {
            rng,
            deck: None,
            current_question: None,
            card_index: 0,
            correct_count: 0,
            incorrect_count: 0,
            total_cards: 0,
            finished: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.deck, self.finished) {
            (None, _)        => SessionPhase::Idle,
            (Some(_), false) => SessionPhase::Active,
            (Some(_), true)  => SessionPhase::Finished,
        }
    }

    /// Begin a session of `total_cards` cards over `selection`.
    ///
    /// An empty selection is not rejected: it plays the full 10 × 10 table.
    /// Returns the first question.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] unless the session is idle.
    pub fn start(
        &mut self,
        total_cards: NonZeroU32,
        selection: &[u8],
    ) -> Result<Question, SessionError> {
        self.require(SessionPhase::Idle, "start")?;

        let universe = Universe::build(selection);
        let mut pool = DrawPool::new();
        let first = scheduler::draw(&universe, &mut pool, &mut self.rng);
        debug!(
            total_cards = total_cards.get(),
            universe = universe.len(),
            ?selection,
            "session started"
        );

        self.deck = Some(Deck { universe, pool });
        self.current_question = Some(first);
        self.card_index = 0;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.total_cards = total_cards.get();
        self.finished = false;
        Ok(first)
    }

    /// Check `raw` against the current card and advance.
    ///
    /// Input that is not a base-10 unsigned integer (after trimming
    /// whitespace) counts as a wrong answer. On the last card the session
    /// finishes with `card_index == total_cards` and the current question is
    /// left in place.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] when idle or finished; nothing changes.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerOutcome, SessionError> {
        let phase = self.phase();
        let (SessionPhase::Active, Some(deck), Some(question)) =
            (phase, self.deck.as_mut(), self.current_question)
        else {
            return Err(SessionError::InvalidState { operation: "submit an answer", phase });
        };

        let was_correct = parse_answer(raw).is_some_and(|n| question.is_answered_by(n));
        if was_correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }

        let next_index = self.card_index + 1;
        let is_last_card = next_index >= self.total_cards;
        self.card_index = next_index;
        if is_last_card {
            self.finished = true;
        } else {
            let next = scheduler::draw(&deck.universe, &mut deck.pool, &mut self.rng);
            self.current_question = Some(next);
        }

        debug!(
            card = next_index,
            total = self.total_cards,
            question = %question,
            was_correct,
            is_last_card,
            "answer submitted"
        );
        Ok(AnswerOutcome { was_correct, is_last_card })
    }

    /// Drop all progress and the question deck. Always succeeds.
    pub fn reset(&mut self) {
        if self.deck.is_some() {
            debug!(
                correct = self.correct_count,
                incorrect = self.incorrect_count,
                "session reset"
            );
        }
        self.deck = None;
        self.current_question = None;
        self.card_index = 0;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.total_cards = 0;
        self.finished = false;
    }

    /// The card on screen. Stale once the session is finished.
    pub fn current_question(&self) -> Option<Question> {
        self.current_question
    }

    /// Zero-based index of the current card; equals `total_cards` once
    /// finished.
    pub fn card_index(&self) -> u32 {
        self.card_index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn total_cards(&self) -> u32 {
        self.total_cards
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn require(&self, expected: SessionPhase, operation: &'static str) -> Result<(), SessionError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidState { operation, phase })
        }
    }
}

/// Strict base-10 parse; `None` for anything that is not a plain number.
fn parse_answer(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

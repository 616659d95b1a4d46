//! Question universe construction and the non-repeating random draw.
//!
//! A [`Universe`] is fixed when a session starts. A [`DrawPool`] tracks which
//! of its questions were already handed out in the current cycle; once every
//! question has been drawn the pool recycles and the cycle starts over.
//!
//! Nothing prevents the last question of one cycle from being the first of the
//! next, so the same card can show up twice in a row across a recycle.

use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::quiz_engine::models::{Question, QuestionKey, FACTOR_MAX, FACTOR_MIN};

/// Every question eligible for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    questions: Vec<Question>,
}

impl Universe {
    /// Cross `selection` with multipliers `1..=10`.
    ///
    /// An empty selection falls back to the full `10 × 10` table. Repeated
    /// values are collapsed; the first occurrence fixes the order. Values are
    /// not range-checked here, `QuizSetup` does that.
    pub fn build(selection: &[u8]) -> Self {
        let full_range: Vec<u8>;
        let multiplicands: &[u8] = if selection.is_empty() {
            full_range = (FACTOR_MIN..=FACTOR_MAX).collect();
            &full_range
        } else {
            selection
        };

        let mut seen = HashSet::new();
        let questions = multiplicands
            .iter()
            .copied()
            .filter(|m| seen.insert(*m))
            .flat_map(|m| (FACTOR_MIN..=FACTOR_MAX).map(move |k| Question::new(m, k)))
            .collect();

        Universe { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for a universe produced by [`Universe::build`].
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The used-set of a universe, kept as a shuffled bag of indices.
///
/// The bag is bound to the universe it was last drawn from. Drawing from a
/// different universe rebinds it: the unused indices are rebuilt from the
/// keys not yet in the used-set.
#[derive(Debug, Clone, Default)]
pub struct DrawPool {
    /// Universe positions whose key is not in `used`.
    unused: Vec<usize>,
    /// Keys drawn in this cycle.
    used: HashSet<QuestionKey>,
    /// Keys of the universe `unused` indexes into.
    bound: Vec<QuestionKey>,
}

impl DrawPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys drawn since the last recycle.
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    pub fn is_used(&self, key: QuestionKey) -> bool {
        self.used.contains(&key)
    }

    pub fn clear(&mut self) {
        self.unused.clear();
        self.used.clear();
        self.bound.clear();
    }

    fn is_bound_to(&self, universe: &Universe) -> bool {
        self.bound.len() == universe.len()
            && self.bound.iter().zip(&universe.questions).all(|(k, q)| *k == q.key())
    }

    fn bind(&mut self, universe: &Universe) {
        self.bound = universe.questions.iter().map(Question::key).collect();
        let used = &self.used;
        self.unused = universe
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !used.contains(&q.key()))
            .map(|(i, _)| i)
            .collect();
    }
}

/// Draw one question not yet used in the current cycle.
///
/// Recycles first when the used-set is at least as large as the universe.
/// Keys left over from another universe count towards that size but are
/// never handed out.
pub fn draw<R: Rng>(universe: &Universe, pool: &mut DrawPool, rng: &mut R) -> Question {
    debug_assert!(!universe.is_empty(), "draw from an empty universe");

    let recycle = pool.used.len() >= universe.len();
    if recycle {
        trace!(size = universe.len(), "draw pool exhausted, recycling");
        pool.used.clear();
    }
    if recycle || !pool.is_bound_to(universe) {
        pool.bind(universe);
    }
    // Every universe key is in `used` only when `used` covers the universe.
    debug_assert!(!pool.unused.is_empty());

    let slot = rng.gen_range(0..pool.unused.len());
    let question = universe.questions[pool.unused.swap_remove(slot)];
    pool.used.insert(question.key());
    trace!(question = %question, remaining = pool.unused.len(), "drew question");
    question
}

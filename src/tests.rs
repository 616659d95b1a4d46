//! Crate-level tests for `times_drill`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Termination | N submissions finish an N-card session with consistent tallies |
//! | No-repeat | No key repeats within one pool cycle, for every selection size |
//! | Universe | Empty selection fallback and per-selection contents |
//! | Answer checking | Right, wrong, empty and non-numeric answers |
//! | Scenario | Ten cards over `{5}`, then a rejected extra submission |
//! | Reset | Back to the initial state, next start behaves like the first |
//! | Determinism | Same seed replays the same questions |

use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::quiz_engine::{
    QuestionKey, Session, SessionError, SessionPhase, Universe,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn cards(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("card count must be positive")
}

/// Keys of every question shown in a session answered with `answer`.
fn play(session: &mut Session, n: u32, selection: &[u8], answer: &str) -> Vec<QuestionKey> {
    session.start(cards(n), selection).unwrap();
    let mut shown = Vec::new();
    for _ in 0..n {
        shown.push(session.current_question().unwrap().key());
        session.submit_answer(answer).unwrap();
    }
    shown
}

/// A spread of selections, from a single number to all ten.
fn selections() -> Vec<Vec<u8>> {
    vec![
        vec![1],
        vec![5],
        vec![10],
        vec![3, 7],
        vec![2, 4, 6, 8],
        vec![9, 1, 5],
        (1..=10).collect(),
    ]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── termination ──────────────────────────────────────────────────────────────

#[test]
fn n_answers_finish_an_n_card_session() {
    for selection in selections() {
        for n in [1u32, 2, 9, 10, 11, 37] {
            let mut s = Session::with_seed(u64::from(n));
            play(&mut s, n, &selection, "0");
            assert!(s.is_finished(), "not finished after {n} cards over {selection:?}");
            assert_eq!(s.phase(), SessionPhase::Finished);
            assert_eq!(s.card_index(), n, "card index after {n} cards over {selection:?}");
            assert_eq!(s.correct_count() + s.incorrect_count(), n);
        }
    }
}

#[test]
fn session_is_not_finished_before_the_last_card() {
    let mut s = Session::with_seed(3);
    s.start(cards(5), &[4]).unwrap();
    for i in 0..4 {
        let outcome = s.submit_answer("0").unwrap();
        assert!(!outcome.is_last_card, "card {i} reported as last");
        assert!(!s.is_finished());
    }
    assert!(s.submit_answer("0").unwrap().is_last_card);
}

// ── no-repeat ────────────────────────────────────────────────────────────────

#[test]
fn no_question_repeats_within_a_cycle() {
    for selection in selections() {
        for seed in SEEDS {
            let cycle = selection.len() as u32 * 10;
            let mut s = Session::with_seed(seed);
            let shown = play(&mut s, cycle * 3, &selection, "0");

            for (i, chunk) in shown.chunks(cycle as usize).enumerate() {
                let distinct: HashSet<_> = chunk.iter().collect();
                assert_eq!(
                    distinct.len(),
                    chunk.len(),
                    "repeat inside cycle {i} for {selection:?} seed={seed}"
                );
            }
        }
    }
}

#[test]
fn every_question_of_the_selection_is_asked_once_per_cycle() {
    let mut s = Session::with_seed(42);
    let shown: HashSet<QuestionKey> = play(&mut s, 20, &[3, 7], "0").into_iter().collect();
    let expected: HashSet<QuestionKey> =
        (1..=10).map(|k| (3, k)).chain((1..=10).map(|k| (7, k))).collect();
    assert_eq!(shown, expected);
}

// ── universe ─────────────────────────────────────────────────────────────────

#[test]
fn empty_selection_universe_is_the_full_table() {
    let universe = Universe::build(&[]);
    let keys: HashSet<QuestionKey> = universe.questions().iter().map(|q| q.key()).collect();
    assert_eq!(universe.len(), 100);
    assert_eq!(keys.len(), 100);
    assert!(keys.iter().all(|&(a, b)| (1..=10).contains(&a) && (1..=10).contains(&b)));
}

#[test]
fn universe_products_match_factors() {
    for q in Universe::build(&[]).questions() {
        assert_eq!(q.product, u32::from(q.multiplicand) * u32::from(q.multiplier));
    }
}

// ── answer checking ──────────────────────────────────────────────────────────

#[test]
fn correct_product_is_accepted_and_neighbour_rejected() {
    // Find a seed whose first card is 4 × 6.
    let mut s = (0..1_000u64)
        .map(Session::with_seed)
        .find_map(|mut s| {
            let first = s.start(cards(3), &[4]).unwrap();
            (first.key() == (4, 6)).then_some(s)
        })
        .expect("some seed starts with 4 × 6");

    assert!(s.submit_answer("24").unwrap().was_correct);

    let q = s.current_question().unwrap();
    let wrong = (q.product + 1).to_string();
    assert!(!s.submit_answer(&wrong).unwrap().was_correct);
}

#[test]
fn four_times_six_rejects_twenty_five() {
    let mut s = (0..1_000u64)
        .map(Session::with_seed)
        .find_map(|mut s| {
            let first = s.start(cards(1), &[4]).unwrap();
            (first.key() == (4, 6)).then_some(s)
        })
        .expect("some seed starts with 4 × 6");
    assert!(!s.submit_answer("25").unwrap().was_correct);
}

#[test]
fn empty_and_non_numeric_answers_are_wrong_without_error() {
    let mut s = Session::with_seed(1);
    s.start(cards(3), &[]).unwrap();
    assert!(!s.submit_answer("").unwrap().was_correct);
    assert!(!s.submit_answer("abc").unwrap().was_correct);
    assert!(!s.submit_answer("   ").unwrap().was_correct);
    assert_eq!(s.incorrect_count(), 3);
    assert_eq!(s.correct_count(), 0);
}

// ── scenario ─────────────────────────────────────────────────────────────────

#[test]
fn ten_cards_over_five() {
    let mut s = Session::with_seed(2024);
    s.start(cards(10), &[5]).unwrap();

    let mut seen = HashSet::new();
    for i in 0..10 {
        let q = s.current_question().unwrap();
        assert_eq!(q.multiplicand, 5);
        assert!(seen.insert(q.key()));
        let outcome = s.submit_answer(&q.product.to_string()).unwrap();
        assert!(outcome.was_correct);
        assert_eq!(outcome.is_last_card, i == 9);
    }

    assert_eq!(s.phase(), SessionPhase::Finished);
    assert_eq!(s.correct_count(), 10);
    assert_eq!(
        s.submit_answer("50"),
        Err(SessionError::InvalidState {
            operation: "submit an answer",
            phase: SessionPhase::Finished,
        })
    );
    assert_eq!(s.correct_count(), 10);
}

// ── reset ────────────────────────────────────────────────────────────────────

#[test]
fn reset_restores_initial_state() {
    let mut s = Session::with_seed(5);
    s.start(cards(6), &[2, 3]).unwrap();
    s.submit_answer("0").unwrap();
    s.submit_answer("0").unwrap();
    s.reset();

    assert_eq!(s.phase(), SessionPhase::Idle);
    assert_eq!(s.current_question(), None);
    assert_eq!(s.card_index(), 0);
    assert_eq!(s.correct_count(), 0);
    assert_eq!(s.incorrect_count(), 0);
    assert_eq!(s.total_cards(), 0);
    assert!(!s.is_finished());
}

#[test]
fn start_after_reset_uses_a_fresh_pool() {
    let mut s = Session::with_seed(8);
    // Leave the pool mid-cycle: 9 of the 10 questions used.
    play(&mut s, 9, &[6], "0");
    s.reset();

    // A fresh cycle must cover all ten questions again.
    let shown: HashSet<QuestionKey> = play(&mut s, 10, &[6], "0").into_iter().collect();
    assert_eq!(shown.len(), 10);
}

#[test]
fn start_after_reset_can_change_selection() {
    let mut s = Session::with_seed(9);
    play(&mut s, 4, &[2], "0");
    s.reset();
    let shown = play(&mut s, 10, &[9], "0");
    assert!(shown.iter().all(|&(a, _)| a == 9));
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_replays_same_questions() {
    for seed in SEEDS {
        let a = play(&mut Session::with_seed(seed), 25, &[2, 7, 9], "0");
        let b = play(&mut Session::with_seed(seed), 25, &[2, 7, 9], "0");
        assert_eq!(a, b, "seed={seed}");
    }
}

#[test]
fn different_seeds_vary_the_order() {
    let a = play(&mut Session::with_seed(1), 10, &[], "0");
    let b = play(&mut Session::with_seed(2), 10, &[], "0");
    assert_ne!(a, b);
}

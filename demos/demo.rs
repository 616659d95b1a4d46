//! End-to-end demo of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Universe** — what a selection expands to, and the 100-question
//!    fallback for an empty selection.
//! 2. **Draw cycle** — one full pass over a small universe with a fixed
//!    seed, then the first draws after the pool recycles.
//! 3. **Scripted session** — a seeded 12-card session where every third
//!    answer is wrong, followed by the summary.

use rand::{rngs::StdRng, SeedableRng};
use times_drill::{
    quiz_engine::{draw, AnswerOutcome},
    DrawPool, QuizSetup, QuizSummary, Session, Universe,
};

fn main() {
    // ── Universe ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Universe ══");
    println!();
    let universe = Universe::build(&[3, 7]);
    let listed: Vec<String> = universe.questions().iter().map(|q| q.to_string()).collect();
    println!("  {{3, 7}} → {} questions: {}", universe.len(), listed.join(", "));
    println!("  {{}}     → {} questions (full table)", Universe::build(&[]).len());

    // ── Draw cycle ────────────────────────────────────────────────────────────
    // Same seed = same order. After ten draws the pool recycles.
    println!();
    println!("══ Draw cycle over {{4}}, seed=7 ══");
    println!();
    let universe = Universe::build(&[4]);
    let mut pool = DrawPool::new();
    let mut rng = StdRng::seed_from_u64(7);
    let cycle: Vec<String> = (0..universe.len())
        .map(|_| draw(&universe, &mut pool, &mut rng).to_string())
        .collect();
    println!("  cycle 1: {}", cycle.join(", "));
    let next: Vec<String> = (0..3)
        .map(|_| draw(&universe, &mut pool, &mut rng).to_string())
        .collect();
    println!("  cycle 2 starts: {} (used: {})", next.join(", "), pool.used_len());

    // ── Scripted session ──────────────────────────────────────────────────────
    println!();
    println!("══ Scripted session: {{2, 9}}, 12 cards, seed=2024 ══");
    println!();
    let mut setup = QuizSetup::new();
    for n in [9, 2] {
        setup.toggle(n).expect("2 and 9 are in range");
    }
    setup.set_card_count(12).expect("12 is a valid card count");
    let valid = setup.validate().expect("setup is complete");

    let mut session = Session::with_seed(2024);
    valid.start(&mut session).expect("fresh session is idle");

    loop {
        let question = session.current_question().expect("session is active");
        let card = session.card_index() + 1;
        let answer = if card % 3 == 0 { question.product + 1 } else { question.product };
        let AnswerOutcome { was_correct, is_last_card } = session
            .submit_answer(&answer.to_string())
            .expect("session is active");
        let mark = if was_correct { "✓" } else { "✗" };
        println!("  [{card:>2}] {question} = {answer:<3} {mark}");
        if is_last_card {
            break;
        }
    }

    println!();
    println!("{}", QuizSummary::from_session(&session));

    // A finished session refuses further answers until reset.
    if let Err(e) = session.submit_answer("1") {
        println!();
        println!("  after finish: {e}");
    }
    session.reset();
    println!("  after reset:  {}", session.phase());
}

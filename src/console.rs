//! Line-oriented terminal front end.
//!
//! Walks the learner through the same screens as the quiz UI: pick numbers,
//! pick a card count (or go back), answer cards one by one, read the results,
//! play again. Generic over the reader and writer so it runs against
//! stdin/stdout or in-memory buffers.
//!
//! Input that is not made of digits never reaches [`Session::submit_answer`];
//! the learner is asked again instead. Quitting mid-quiz asks for
//! confirmation, since it throws the progress away.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::quiz_engine::{
    error::{SessionError, SetupError},
    models::SessionPhase,
    parse_card_count, parse_number,
    session::Session,
    setup::QuizSetup,
    summary::QuizSummary,
};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed before the quiz finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("failed to encode summary: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How a quiz run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEnd {
    Completed(QuizSummary),
    /// The learner typed `q` and confirmed; the session was reset.
    Abandoned,
}

/// Answer to the card-count prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCountChoice {
    Chosen,
    /// The learner typed `b` to return to number selection.
    Back,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Ask until at least one valid number is chosen.
    pub fn choose_numbers(&mut self, setup: &mut QuizSetup) -> Result<(), ConsoleError> {
        loop {
            let line = self.ask("Choose numbers to practice (1-10, e.g. \"3,7\", or \"all\"): ")?;
            let line = line.trim();

            if line.eq_ignore_ascii_case("all") {
                setup.select_all();
            } else {
                let outcome = line
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(parse_number)
                    .collect::<Result<Vec<u8>, _>>()
                    .and_then(|numbers| setup.replace_selection(numbers));
                if let Err(e) = outcome {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            }

            if setup.selected().is_empty() {
                writeln!(self.output, "Select at least one number.")?;
                continue;
            }
            writeln!(self.output, "Selected: {}", join(&setup.selected()))?;
            return Ok(());
        }
    }

    /// Ask until a card count greater than zero is entered or the learner
    /// goes back with `b`. An empty line picks the first preset.
    pub fn choose_card_count(
        &mut self,
        setup: &mut QuizSetup,
        presets: &[u32],
    ) -> Result<CardCountChoice, ConsoleError> {
        let prompt = format!("How many cards? [{}], your own, or b to go back: ", join(presets));
        loop {
            let line = self.ask(&prompt)?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("b") {
                return Ok(CardCountChoice::Back);
            }
            let input = match (line.is_empty(), presets.first()) {
                (true, Some(first)) => first.to_string(),
                _ => line.to_string(),
            };
            match parse_card_count(&input) {
                Ok(count) => {
                    setup.set_card_count(count.get())?;
                    return Ok(CardCountChoice::Chosen);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Numbers first, then the card count; going back from the count
    /// returns to the numbers.
    pub fn choose_setup(
        &mut self,
        setup: &mut QuizSetup,
        presets: &[u32],
    ) -> Result<(), ConsoleError> {
        loop {
            self.choose_numbers(setup)?;
            if self.choose_card_count(setup, presets)? == CardCountChoice::Chosen {
                return Ok(());
            }
        }
    }

    /// Play `session` to the end. The session must already be started.
    pub fn run_quiz(&mut self, session: &mut Session) -> Result<QuizEnd, ConsoleError> {
        loop {
            let phase = session.phase();
            let (SessionPhase::Active, Some(question)) = (phase, session.current_question())
            else {
                return Err(SessionError::InvalidState { operation: "run a quiz", phase }.into());
            };
            writeln!(
                self.output,
                "Card {}/{}   correct {}  wrong {}",
                session.card_index() + 1,
                session.total_cards(),
                session.correct_count(),
                session.incorrect_count()
            )?;

            let answer = loop {
                let line = self.ask(&format!("{question} = "))?;
                let trimmed = line.trim().to_string();
                if trimmed.eq_ignore_ascii_case("q") {
                    if self.confirm("Quit? Your progress will be lost [y/N]: ")? {
                        break None;
                    }
                    continue;
                }
                if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    break Some(trimmed);
                }
                writeln!(self.output, "Please type a number (or q to quit).")?;
            };

            let Some(answer) = answer else {
                session.reset();
                writeln!(self.output, "Quiz abandoned, progress discarded.")?;
                return Ok(QuizEnd::Abandoned);
            };

            let outcome = session.submit_answer(&answer)?;
            if outcome.was_correct {
                writeln!(self.output, "Correct!")?;
            } else {
                writeln!(self.output, "Not quite: {question} = {}", question.product)?;
            }
            if outcome.is_last_card {
                return Ok(QuizEnd::Completed(QuizSummary::from_session(session)));
            }
        }
    }

    pub fn show_summary(
        &mut self,
        summary: &QuizSummary,
        as_json: bool,
    ) -> Result<(), ConsoleError> {
        if as_json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(summary)?)?;
        } else {
            writeln!(self.output)?;
            writeln!(self.output, "Quiz finished!")?;
            writeln!(self.output, "{summary}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Offer another round. Closed input means no.
    pub fn play_again(&mut self) -> Result<bool, ConsoleError> {
        match self.confirm("Play again? [y/N]: ") {
            Err(ConsoleError::InputClosed) => Ok(false),
            other => other,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// `y` or `yes` confirms; anything else declines.
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        let line = self.ask(prompt)?;
        let line = line.trim();
        Ok(line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes"))
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

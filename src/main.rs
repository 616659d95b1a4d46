//! times-drill CLI: a multiplication-table flashcard quiz in the terminal.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use times_drill::{
    config::ConfigLoader,
    console::{CardCountChoice, Console, QuizEnd},
    QuizSetup, Session,
};

#[derive(Parser)]
#[command(name = "times-drill", version, about = "Multiplication-table flashcard quiz")]
struct Cli {
    /// Numbers to practice, e.g. "3,7" (asked interactively when omitted)
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    numbers: Vec<u8>,

    /// Practice every number from 1 to 10
    #[arg(long)]
    all: bool,

    /// How many cards to play (asked interactively when omitted)
    #[arg(long)]
    cards: Option<u32>,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("times_drill=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigLoader::load(cli.config.as_deref()).context("loading configuration")?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    let seed = cli.seed.or(config.seed);
    let mut session = match seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };

    // Flags and config only shape the first round; later rounds ask.
    let mut setup = QuizSetup::new();
    let mut numbers_given = true;
    if cli.all {
        setup.select_all();
    } else if !cli.numbers.is_empty() {
        setup.replace_selection(cli.numbers)?;
    } else if !config.numbers.is_empty() {
        setup
            .replace_selection(config.numbers.iter().copied())
            .context("invalid `numbers` in configuration")?;
    } else {
        numbers_given = false;
    }
    let mut cards = cli.cards.or(config.cards);

    loop {
        match (numbers_given, cards.take()) {
            (true, Some(count)) => setup.set_card_count(count)?,
            (false, Some(count)) => {
                console.choose_numbers(&mut setup)?;
                setup.set_card_count(count)?;
            }
            (true, None) => {
                let choice = console.choose_card_count(&mut setup, &config.presets)?;
                if choice == CardCountChoice::Back {
                    console.choose_setup(&mut setup, &config.presets)?;
                }
            }
            (false, None) => console.choose_setup(&mut setup, &config.presets)?,
        }

        let valid = setup.validate()?;
        info!(numbers = ?valid.numbers, cards = valid.total_cards.get(), ?seed, "starting quiz");
        valid.start(&mut session)?;

        match console.run_quiz(&mut session)? {
            QuizEnd::Completed(summary) => console.show_summary(&summary, cli.json)?,
            QuizEnd::Abandoned => info!("quiz abandoned"),
        }

        if !console.play_again()? {
            return Ok(());
        }
        session.reset();
        setup = QuizSetup::new();
        numbers_given = false;
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use guess_number::core::{DEFAULT_MAX, DEFAULT_MIN};
use guess_number::{GameConfig, GameRng, GuessSession};

/// Guess the secret number in as few attempts as possible.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Lowest possible secret
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: i64,

    /// Highest possible secret
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: i64,

    /// RNG seed (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the secret before the first prompt
    #[arg(long)]
    reveal: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::new(args.min, args.max).context("Invalid game range")?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_time(),
    };
    info!("starting game with seed {}", rng.seed());

    let mut session = GuessSession::with_rng(config, &mut rng).with_reveal(args.reveal);
    let outcome = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Game aborted")?;

    info!("finished after {} attempts", outcome.attempts);
    Ok(())
}

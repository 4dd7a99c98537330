//! Interactive game session.
//!
//! Drives one game over a text console:
//! - announces the range and prompts with an attempt counter
//! - rejects out-of-range guesses without counting them or resuming the engine
//! - renders the engine's hint after each accepted guess
//! - stops with an [`Outcome`] once the secret is found
//!
//! Reader and writer are generic so the whole protocol runs in tests
//! against in-memory buffers.

mod input;

pub use input::TokenReader;

use log::{info, warn};
use std::io::{BufRead, Write};

use crate::core::{GameConfig, GameRng, Secret};
use crate::engine::{ComparisonEngine, Hint};
use crate::error::GameError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub secret: Secret,
    /// Accepted guesses, including the winning one.
    pub attempts: u32,
}

/// One game: configuration, engine, and attempt tally.
pub struct GuessSession {
    config: GameConfig,
    engine: ComparisonEngine,
    attempts: u32,
    reveal: bool,
}

impl GuessSession {
    /// Create a session around a known secret.
    #[must_use]
    pub fn new(config: GameConfig, secret: Secret) -> Self {
        Self {
            config,
            engine: ComparisonEngine::new(secret),
            attempts: 0,
            reveal: false,
        }
    }

    /// Create a session whose secret is drawn from `rng`.
    pub fn with_rng(config: GameConfig, rng: &mut GameRng) -> Self {
        let secret = Secret::draw(rng, &config);
        Self::new(config, secret)
    }

    /// Print the secret before play starts.
    #[must_use]
    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &ComparisonEngine {
        &self.engine
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Submit one guess.
    ///
    /// Out-of-range guesses are rejected before the engine sees them and do
    /// not count as attempts. Submitting after the game is won returns the
    /// final `Equal` again without counting.
    pub fn submit(&mut self, guess: i64) -> Result<Hint, GameError> {
        let guess = self.config.check_guess(guess)?;

        if self.engine.is_finished() {
            return Ok(Hint::Equal);
        }

        self.attempts += 1;
        self.engine.resume(guess);
        // An active engine always holds a result after a resumption
        Ok(self.engine.last_result().unwrap_or(Hint::Equal))
    }

    /// Play the game to completion.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<Outcome, GameError> {
        let (min, max) = (self.config.min(), self.config.max());
        let mut tokens = TokenReader::new(input);

        writeln!(output, "### Guess the number ###")?;
        writeln!(output, "Secret number generated between {min} and {max}.")?;
        if self.reveal {
            writeln!(output, "[DEBUG] Secret number: {}", self.engine.secret())?;
        }
        writeln!(output, "--- Game log ---")?;

        while !self.engine.is_finished() {
            write!(
                output,
                "Attempt {}: enter a number ({min}-{max}): ",
                self.attempts + 1
            )?;
            output.flush()?;

            let token = tokens.next_token()?.ok_or(GameError::InputClosed)?;
            let guess: i64 = token.parse().map_err(|_| GameError::MalformedInput(token))?;

            match self.submit(guess) {
                Ok(hint) => writeln!(output, "   Answer: {}", describe(guess, hint))?,
                Err(err @ GameError::OutOfRange { .. }) => {
                    warn!("rejected guess: {}", err);
                    writeln!(output, "   Error: enter a number in the range {min}-{max}.")?;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(output, "--- Game over ---")?;
        writeln!(output, "Game completed in {} attempts.", self.attempts)?;
        output.flush()?;

        info!("secret {} found in {} attempts", self.engine.secret(), self.attempts);
        Ok(Outcome {
            secret: self.engine.secret(),
            attempts: self.attempts,
        })
    }
}

fn describe(guess: i64, hint: Hint) -> String {
    let code = hint.code();
    match hint {
        Hint::Greater => format!("{guess} is too low, the secret is greater (+{code})."),
        Hint::Less => format!("{guess} is too high, the secret is less ({code})."),
        Hint::Equal => format!("{guess} is the secret number ({code}). Guessed it!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: i64) -> GuessSession {
        GuessSession::new(GameConfig::default(), Secret::new(secret))
    }

    #[test]
    fn test_submit_counts_accepted_guesses() {
        let mut game = session(50);

        assert_eq!(game.submit(25).unwrap(), Hint::Greater);
        assert_eq!(game.submit(75).unwrap(), Hint::Less);
        assert_eq!(game.submit(50).unwrap(), Hint::Equal);
        assert_eq!(game.attempts(), 3);
        assert!(game.engine().is_finished());
    }

    #[test]
    fn test_submit_out_of_range_skips_engine() {
        let mut game = session(50);

        for guess in [0, 101] {
            let err = game.submit(guess).unwrap_err();
            assert!(!err.is_fatal());
        }

        assert_eq!(game.attempts(), 0);
        assert_eq!(game.engine().resumptions(), 0);
        assert_eq!(game.engine().last_result(), None);
    }

    #[test]
    fn test_submit_after_win_is_not_counted() {
        let mut game = session(3);
        game.submit(3).unwrap();

        assert_eq!(game.submit(99).unwrap(), Hint::Equal);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.engine().resumptions(), 1);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(25, Hint::Greater),
            "25 is too low, the secret is greater (+1)."
        );
        assert_eq!(describe(75, Hint::Less), "75 is too high, the secret is less (-1).");
        assert_eq!(describe(50, Hint::Equal), "50 is the secret number (0). Guessed it!");
    }

    #[test]
    fn test_with_rng_draws_in_range() {
        let config = GameConfig::new(10, 12).unwrap();
        let mut rng = GameRng::new(42);
        let game = GuessSession::with_rng(config, &mut rng);

        assert!(config.contains(game.engine().secret().value()));
        assert_eq!(game.config(), &config);
    }
}

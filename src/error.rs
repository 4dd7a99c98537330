//! Error type shared by the configuration, session, and binary layers.

/// Everything that can go wrong while setting up or playing a game.
///
/// Only `OutOfRange` is recoverable: the session reports it and re-prompts.
/// Every other variant ends the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("guess {guess} is outside the range {min}-{max}")]
    OutOfRange { guess: i64, min: i64, max: i64 },
    #[error("malformed input: `{0}` is not an integer")]
    MalformedInput(String),
    #[error("input ended before the secret number was guessed")]
    InputClosed,
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("console I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error ends the game.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GameError::OutOfRange { .. })
    }
}

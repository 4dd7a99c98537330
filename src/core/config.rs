//! Game configuration.
//!
//! `GameConfig` fixes the inclusive range the secret is drawn from and the
//! range every accepted guess must fall in. It is validated once, when built,
//! so the generator and the session can treat the range as trusted.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default lower bound of the secret range.
pub const DEFAULT_MIN: i64 = 1;

/// Default upper bound of the secret range.
pub const DEFAULT_MAX: i64 = 100;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    min: i64,
    max: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the closed range `[min, max]`.
    pub fn new(min: i64, max: i64) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Replace the lower bound.
    pub fn with_min(self, min: i64) -> Result<Self, GameError> {
        Self::new(min, self.max)
    }

    /// Replace the upper bound.
    pub fn with_max(self, max: i64) -> Result<Self, GameError> {
        Self::new(self.min, max)
    }

    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Is `guess` inside the configured range?
    #[must_use]
    pub fn contains(&self, guess: i64) -> bool {
        (self.min..=self.max).contains(&guess)
    }

    /// Accept an in-range guess, or report it as `OutOfRange`.
    pub fn check_guess(&self, guess: i64) -> Result<i64, GameError> {
        if self.contains(guess) {
            Ok(guess)
        } else {
            Err(GameError::OutOfRange {
                guess,
                min: self.min,
                max: self.max,
            })
        }
    }
}

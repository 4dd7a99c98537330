//! Secret generation.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::rng::GameRng;

/// Draw one integer uniformly from the closed interval `[min, max]`.
///
/// The range is trusted: callers obtain it from a validated `GameConfig`.
pub fn generate(rng: &mut GameRng, min: i64, max: i64) -> i64 {
    rng.gen_range_inclusive(min, max)
}

/// The number the player has to find. Fixed for the lifetime of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret(i64);

impl Secret {
    /// Wrap a known value, e.g. in tests or when replaying a game.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Draw a secret inside `config`'s range.
    pub fn draw(rng: &mut GameRng, config: &GameConfig) -> Self {
        let value = generate(rng, config.min(), config.max());
        debug!(
            "secret drawn in {}-{} (seed {})",
            config.min(),
            config.max(),
            rng.seed()
        );
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

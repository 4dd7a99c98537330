//! Deterministic random number generation for secret draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Explicitly owned**: No process-wide generator; callers pass `&mut GameRng`
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use guess_number::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.gen_range_inclusive(1, 100), rng2.gen_range_inclusive(1, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic RNG backing the secret generator.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the wall clock.
    ///
    /// Seconds and sub-second nanos are mixed so two games started within
    /// the same second still get different seeds.
    #[must_use]
    pub fn from_time() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed
                .as_secs()
                .wrapping_mul(0x9E3779B97F4A7C15)
                .wrapping_add(u64::from(elapsed.subsec_nanos())),
            // Clock set before 1970
            Err(_) => 0,
        };
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the closed interval `[min, max]`.
    ///
    /// Panics if `min > max`; callers validate ranges through `GameConfig`.
    pub fn gen_range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying a game's draw.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

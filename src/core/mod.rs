//! Core game types: RNG, configuration, and the secret.
//!
//! Everything here is independent of how the game is played; the engine and
//! the session build on top of these.

pub mod rng;
pub mod config;
pub mod secret;

pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_MAX, DEFAULT_MIN};
pub use secret::{generate, Secret};

//! # guess-number
//!
//! A console number-guessing game built around a resumable comparison engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit state machine**: The comparison loop is a struct with a
//!    `resume(guess)` step, not a coroutine. Its state survives between
//!    re-entries because it is ordinary data.
//!
//! 2. **Owned randomness**: The secret is drawn from a `GameRng` the caller
//!    constructs and passes in. No process-wide generator.
//!
//! 3. **Validation at the edge**: The session rejects out-of-range input;
//!    the engine only ever compares.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, secret generation
//! - `engine`: The comparison state machine and hints
//! - `session`: The interactive console protocol
//! - `error`: `GameError`

pub mod core;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::core::{generate, GameConfig, GameRng, GameRngState, Secret};

pub use crate::engine::{compare, ComparisonEngine, EngineState, Hint};

pub use crate::error::GameError;

pub use crate::session::{GuessSession, Outcome};

//! Comparison engine.
//!
//! A resumable step function over a fixed secret:
//! - `resume(guess)` compares and records a [`Hint`]
//! - the first exact match moves it to [`EngineState::Finished`]
//! - nothing advances it after that
//!
//! Range validation is the caller's job; the engine compares whatever it is given.

pub mod comparison;

pub use comparison::{compare, ComparisonEngine, EngineState, Hint};

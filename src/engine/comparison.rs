//! Resumable comparison engine.
//!
//! The engine holds the secret and advances one step per `resume(guess)`:
//! compare, record the hint, suspend. It finishes on the first exact match.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::Secret;

/// Direction of the secret relative to a guess.
///
/// Named from the secret's side: `Greater` means the secret is greater than
/// the guess, so the guess was too low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// Secret is less than the guess (guess too high).
    Less,
    /// Guess matches the secret.
    Equal,
    /// Secret is greater than the guess (guess too low).
    Greater,
}

impl Hint {
    /// Tri-state code: `Less` = -1, `Equal` = 0, `Greater` = +1.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Hint::Less => -1,
            Hint::Equal => 0,
            Hint::Greater => 1,
        }
    }

    /// Inverse of [`Hint::code`].
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Hint::Less),
            0 => Some(Hint::Equal),
            1 => Some(Hint::Greater),
            _ => None,
        }
    }
}

impl From<Ordering> for Hint {
    /// Converts `secret.cmp(&guess)`.
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Hint::Less,
            Ordering::Equal => Hint::Equal,
            Ordering::Greater => Hint::Greater,
        }
    }
}

/// Compare a guess against the secret.
#[must_use]
pub fn compare(guess: i64, secret: i64) -> Hint {
    Hint::from(secret.cmp(&guess))
}

/// Lifecycle of a [`ComparisonEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Not yet run to its first suspension point.
    #[default]
    NotStarted,
    /// Suspended, ready for the next guess.
    AwaitingGuess,
    /// Reported `Equal`; accepts nothing further.
    Finished,
}

/// State machine standing in for a guess-comparing coroutine.
///
/// ```
/// use guess_number::core::Secret;
/// use guess_number::engine::{ComparisonEngine, Hint};
///
/// let mut engine = ComparisonEngine::new(Secret::new(50));
///
/// assert!(engine.resume(25));
/// assert_eq!(engine.last_result(), Some(Hint::Greater));
///
/// assert!(!engine.resume(50));
/// assert!(engine.is_finished());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEngine {
    secret: Secret,
    last_result: Option<Hint>,
    state: EngineState,
    resumptions: u32,
}

impl ComparisonEngine {
    /// Create an engine for `secret`.
    ///
    /// The engine runs straight to its first suspension point, so it is
    /// already awaiting a guess when returned.
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        let mut engine = Self {
            secret,
            last_result: None,
            state: EngineState::NotStarted,
            resumptions: 0,
        };
        engine.start();
        engine
    }

    fn start(&mut self) {
        debug_assert_eq!(self.state, EngineState::NotStarted);
        self.state = EngineState::AwaitingGuess;
        info!("comparison engine ready");
    }

    /// Advance one step with `guess`.
    ///
    /// Returns whether the engine is still active afterwards. Once finished
    /// this is a no-op that returns `false` and leaves `last_result` alone.
    pub fn resume(&mut self, guess: i64) -> bool {
        if self.state != EngineState::AwaitingGuess {
            return false;
        }

        let hint = compare(guess, self.secret.value());
        self.last_result = Some(hint);
        self.resumptions += 1;
        debug!("resumption {}: guess {} -> {:?}", self.resumptions, guess, hint);

        if hint == Hint::Equal {
            self.state = EngineState::Finished;
        }

        !self.is_finished()
    }

    /// Most recent hint, `None` before the first resumption.
    #[must_use]
    pub fn last_result(&self) -> Option<Hint> {
        self.last_result
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of resumptions that advanced the engine.
    #[must_use]
    pub fn resumptions(&self) -> u32 {
        self.resumptions
    }

    #[must_use]
    pub fn secret(&self) -> Secret {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_directions() {
        assert_eq!(compare(25, 50), Hint::Greater);
        assert_eq!(compare(75, 50), Hint::Less);
        assert_eq!(compare(50, 50), Hint::Equal);
    }

    #[test]
    fn test_hint_codes() {
        assert_eq!(Hint::Less.code(), -1);
        assert_eq!(Hint::Equal.code(), 0);
        assert_eq!(Hint::Greater.code(), 1);

        for hint in [Hint::Less, Hint::Equal, Hint::Greater] {
            assert_eq!(Hint::from_code(hint.code()), Some(hint));
        }
        assert_eq!(Hint::from_code(2), None);
        assert_eq!(Hint::from_code(-2), None);
    }

    #[test]
    fn test_ready_on_creation() {
        let engine = ComparisonEngine::new(Secret::new(10));

        assert_eq!(engine.state(), EngineState::AwaitingGuess);
        assert_eq!(engine.last_result(), None);
        assert!(!engine.is_finished());
        assert_eq!(engine.resumptions(), 0);
    }

    #[test]
    fn test_wrong_guesses_keep_engine_active() {
        let mut engine = ComparisonEngine::new(Secret::new(50));

        assert!(engine.resume(25));
        assert_eq!(engine.last_result(), Some(Hint::Greater));
        assert_eq!(engine.state(), EngineState::AwaitingGuess);

        assert!(engine.resume(75));
        assert_eq!(engine.last_result(), Some(Hint::Less));
        assert_eq!(engine.resumptions(), 2);
    }

    #[test]
    fn test_match_finishes_engine() {
        let mut engine = ComparisonEngine::new(Secret::new(50));
        engine.resume(25);

        assert!(!engine.resume(50));
        assert_eq!(engine.last_result(), Some(Hint::Equal));
        assert!(engine.is_finished());
        assert_eq!(engine.state(), EngineState::Finished);
    }

    #[test]
    fn test_finished_engine_ignores_resume() {
        let mut engine = ComparisonEngine::new(Secret::new(7));
        assert!(!engine.resume(7));

        for guess in [1, 7, 100] {
            assert!(!engine.resume(guess));
            assert_eq!(engine.last_result(), Some(Hint::Equal));
            assert!(engine.is_finished());
        }
        assert_eq!(engine.resumptions(), 1);
    }

    #[test]
    fn test_engine_does_not_validate_range() {
        let mut engine = ComparisonEngine::new(Secret::new(50));
        assert!(engine.resume(-1_000));
        assert_eq!(engine.last_result(), Some(Hint::Greater));
        assert!(engine.resume(i64::MAX));
        assert_eq!(engine.last_result(), Some(Hint::Less));
    }

    #[test]
    fn test_engine_serde() {
        let mut engine = ComparisonEngine::new(Secret::new(42));
        engine.resume(10);

        let json = serde_json::to_string(&engine).unwrap();
        let mut restored: ComparisonEngine = serde_json::from_str(&json).unwrap();

        assert_eq!(engine, restored);
        assert!(!restored.resume(42));
        assert_eq!(restored.resumptions(), 2);
    }
}

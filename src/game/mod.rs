//! Game loop
//!
//! A [`Game`] pits a secret word against guesses, typed by a human or produced
//! by a [`Player`](crate::player::Player), and tracks the resulting history.

mod engine;
mod history;

pub use engine::{Game, GameError, GameOutcome, GameState};
pub use history::{GuessHistory, Turn};

/// Rules of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub length: usize,
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
    /// Only accept guesses from the corpus
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: 5,
            max_guesses: 6,
            strict: true,
        }
    }
}

impl GameConfig {
    /// Strict configuration with the given word length and guess limit
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if either value is zero.
    pub fn new(length: usize, max_guesses: usize) -> Result<Self, GameError> {
        let config = Self {
            length,
            max_guesses,
            strict: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same rules, but accept guesses outside the corpus
    #[must_use]
    pub const fn lenient(self) -> Self {
        Self {
            strict: false,
            ..self
        }
    }

    /// # Errors
    /// Returns `GameError::InvalidConfig` if the word length or guess limit is zero.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.length == 0 {
            return Err(GameError::InvalidConfig("word length must be at least 1"));
        }
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfig("max guesses must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_wordle() {
        let config = GameConfig::default();
        assert_eq!((config.length, config.max_guesses, config.strict), (5, 6, true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        assert!(GameConfig::new(0, 6).is_err());
        assert!(GameConfig::new(5, 0).is_err());
        assert!(GameConfig::new(4, 8).is_ok());
    }

    #[test]
    fn lenient_keeps_other_fields() {
        let config = GameConfig::new(6, 10).unwrap().lenient();
        assert_eq!(config.length, 6);
        assert_eq!(config.max_guesses, 10);
        assert!(!config.strict);
    }
}

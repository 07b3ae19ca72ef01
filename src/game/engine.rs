//! One game of Wordle against a fixed secret
//!
//! States: `AwaitingGuess` until the secret is found (`Won`) or the guess
//! limit is used up (`Lost`). Invalid guesses never change the state.

use super::{GameConfig, GuessHistory};
use crate::core::{ConstraintError, Feedback, Word, WordError};
use crate::player::{Player, StrategyExhausted};
use crate::wordlists::Corpus;
use rand::Rng;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Errors from setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("{0:?} is not in the word list")]
    UnknownWord(String),
    #[error("the game is already over ({0:?})")]
    GameOver(GameState),
    #[error("secret must be {expected} letters, got {actual}")]
    SecretLength { expected: usize, actual: usize },
    #[error("word list has {actual}-letter words but the game uses {expected}")]
    CorpusLength { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Word,
    pub won: bool,
    /// Guesses actually played
    pub guesses: usize,
    /// The player ran out of candidates before the limit
    pub exhausted: bool,
}

/// A single game: secret, configuration, history and state
pub struct Game<'a> {
    config: GameConfig,
    corpus: &'a Corpus,
    secret: Word,
    history: GuessHistory,
    state: GameState,
    exhausted: bool,
}

impl<'a> Game<'a> {
    /// Start a game against `secret`
    ///
    /// # Errors
    /// Returns `GameError` if the configuration is invalid or the corpus or
    /// secret length differ from the configured word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    /// use wordle_arena::game::{Game, GameConfig, GameState};
    /// use wordle_arena::wordlists::Corpus;
    ///
    /// let corpus = Corpus::english(5).unwrap();
    /// let secret = Word::new("daisy").unwrap();
    /// let mut game = Game::new(GameConfig::default(), &corpus, secret).unwrap();
    ///
    /// for guess in ["lunch", "metro", "daisy"] {
    ///     game.guess(guess).unwrap();
    /// }
    /// assert_eq!(game.state(), GameState::Won);
    /// assert_eq!(game.history().len(), 3);
    /// ```
    pub fn new(config: GameConfig, corpus: &'a Corpus, secret: Word) -> Result<Self, GameError> {
        config.validate()?;
        if corpus.word_length() != config.length {
            return Err(GameError::CorpusLength {
                expected: config.length,
                actual: corpus.word_length(),
            });
        }
        if secret.len() != config.length {
            return Err(GameError::SecretLength {
                expected: config.length,
                actual: secret.len(),
            });
        }

        Ok(Self {
            history: GuessHistory::new(config.length),
            config,
            corpus,
            secret,
            state: GameState::AwaitingGuess,
            exhausted: false,
        })
    }

    /// Start a game against a secret drawn from the corpus with the caller's RNG
    ///
    /// # Errors
    /// Same as [`Game::new`].
    pub fn random<R: Rng + ?Sized>(
        config: GameConfig,
        corpus: &'a Corpus,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = corpus.choose(rng).clone();
        Self::new(config, corpus, secret)
    }

    /// Parse and play a guess typed as text
    ///
    /// Checks run in order: game over, length, alphabet, dictionary.
    ///
    /// # Errors
    /// See [`Game::guess_word`]; malformed text gives `GameError::InvalidWord`.
    pub fn guess(&mut self, text: &str) -> Result<Feedback, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        let actual = text.trim().chars().count();
        if actual != self.config.length {
            return Err(GameError::InvalidGuessLength {
                expected: self.config.length,
                actual,
            });
        }
        let word = Word::new(text)?;
        self.guess_word(word)
    }

    /// Play a guess and return its feedback
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::InvalidGuessLength` for a guess of the wrong length
    /// - `GameError::UnknownWord` for a word outside the corpus when strict
    ///
    /// The game is unchanged when an error is returned.
    pub fn guess_word(&mut self, word: Word) -> Result<Feedback, GameError> {
        self.validate_guess(&word)?;

        let feedback = Feedback::evaluate(&self.secret, &word);
        log::debug!(
            "guess {}: {} {} (secret {})",
            self.history.len() + 1,
            word,
            feedback,
            self.secret
        );

        self.history.push(word, feedback.clone())?;

        if feedback.is_solved() {
            self.state = GameState::Won;
        } else if self.history.len() >= self.config.max_guesses {
            self.state = GameState::Lost;
        }

        Ok(feedback)
    }

    /// Check a guess without playing it
    ///
    /// # Errors
    /// Same conditions as [`Game::guess_word`].
    pub fn validate_guess(&self, word: &Word) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        if word.len() != self.config.length {
            return Err(GameError::InvalidGuessLength {
                expected: self.config.length,
                actual: word.len(),
            });
        }
        if self.config.strict && !self.corpus.contains(word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }
        Ok(())
    }

    /// Let `player` guess until the game ends
    ///
    /// A player that runs out of candidates loses the game.
    ///
    /// # Errors
    /// Returns `GameError` if the player produces an invalid guess (for example
    /// an opening word outside a strict word list) or the game is already over.
    pub fn play<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<GameOutcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }

        while self.state == GameState::AwaitingGuess {
            match player.next_guess(&self.history) {
                Ok(word) => {
                    self.guess_word(word)?;
                }
                Err(StrategyExhausted) => {
                    log::warn!(
                        "no candidates left after {} guesses (secret {})",
                        self.history.len(),
                        self.secret
                    );
                    self.exhausted = true;
                    self.state = GameState::Lost;
                }
            }
        }

        Ok(self.outcome())
    }

    /// Snapshot of the result so far
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            secret: self.secret.clone(),
            won: self.state == GameState::Won,
            guesses: self.history.len(),
            exhausted: self.exhausted,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Guesses still available
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    /// Corpus words still consistent with every feedback so far
    #[must_use]
    pub fn remaining_candidates(&self) -> Vec<&'a Word> {
        let constraints = self.history.constraints();
        self.corpus
            .iter()
            .filter(|w| constraints.matches(w))
            .collect()
    }
}

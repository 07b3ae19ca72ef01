//! Scripted Wordle players
//!
//! Every player implements [`Player`]. [`AnyPlayer`] wraps the concrete players
//! so one can be chosen at runtime while keeping static dispatch.

mod fixed;
mod random;
mod ranked;

pub use fixed::FixedInitialGreedy;
pub use random::RandomPlayer;
pub use ranked::EntropyRanked;

use crate::core::Word;
use crate::game::GuessHistory;
use crate::wordlists::Corpus;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The player has no candidate word left to guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no candidate word is consistent with the feedback")]
pub struct StrategyExhausted;

/// Errors raised while building a player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("initial guess {word:?} has {actual} letters, expected {expected}")]
    InitialGuessLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("unknown player kind {0:?} (expected greedy, ranked or random)")]
    UnknownKind(String),
}

/// Something that picks the next guess of a game
pub trait Player {
    /// Choose the next guess given everything played so far
    ///
    /// # Errors
    /// Returns `StrategyExhausted` if no consistent candidate remains.
    fn next_guess(&mut self, history: &GuessHistory) -> Result<Word, StrategyExhausted>;
}

/// Fixed opening word for guess number `history.len()`, if any is left
fn opening(initial: &[Word], history: &GuessHistory) -> Option<Word> {
    initial.get(history.len()).cloned()
}

/// Corpus words consistent with all feedback so far, in corpus order
fn candidates<'a>(corpus: &'a Corpus, history: &GuessHistory) -> Vec<&'a Word> {
    let constraints = history.constraints();
    corpus.iter().filter(|w| constraints.matches(w)).collect()
}

fn check_initial(initial: &[Word], length: usize) -> Result<(), PlayerError> {
    match initial.iter().find(|w| w.len() != length) {
        Some(word) => Err(PlayerError::InitialGuessLength {
            word: word.text().to_string(),
            expected: length,
            actual: word.len(),
        }),
        None => Ok(()),
    }
}

/// Player kinds selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    /// First consistent candidate in corpus order
    Greedy,
    /// Consistent candidate with the highest letter-frequency score
    Ranked,
    /// Any corpus word, uniformly at random
    Random,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Greedy => "greedy",
            Self::Ranked => "ranked",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerKind {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" | "fixed" => Ok(Self::Greedy),
            "ranked" | "entropy" => Ok(Self::Ranked),
            "random" => Ok(Self::Random),
            other => Err(PlayerError::UnknownKind(other.to_string())),
        }
    }
}

/// Enum wrapper for all player types
pub enum AnyPlayer<'a> {
    Greedy(FixedInitialGreedy<'a>),
    Ranked(EntropyRanked<'a>),
    Random(RandomPlayer<'a>),
}

impl Player for AnyPlayer<'_> {
    fn next_guess(&mut self, history: &GuessHistory) -> Result<Word, StrategyExhausted> {
        match self {
            Self::Greedy(p) => p.next_guess(history),
            Self::Ranked(p) => p.next_guess(history),
            Self::Random(p) => p.next_guess(history),
        }
    }
}

/// A player configuration: kind plus opening words
///
/// Cheap to clone and `Send`, so experiments can build a fresh player per game.
///
/// # Examples
/// ```
/// use wordle_arena::player::{PlayerKind, PlayerSpec};
///
/// let spec = PlayerSpec::parse(PlayerKind::Greedy, "lunch,metro").unwrap();
/// assert_eq!(spec.to_string(), "greedy [lunch metro]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub kind: PlayerKind,
    pub initial: Vec<Word>,
}

impl PlayerSpec {
    #[must_use]
    pub const fn new(kind: PlayerKind, initial: Vec<Word>) -> Self {
        Self { kind, initial }
    }

    /// Parse opening words separated by commas or whitespace
    ///
    /// # Errors
    /// Returns `WordError` for a malformed word.
    pub fn parse(kind: PlayerKind, initial: &str) -> Result<Self, crate::core::WordError> {
        let initial = initial
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(kind, initial))
    }

    /// Build a player over `corpus`; `seed` only matters for random players
    ///
    /// # Errors
    /// Returns `PlayerError::InitialGuessLength` if an opening word does not
    /// match the corpus word length.
    pub fn build<'a>(&self, corpus: &'a Corpus, seed: u64) -> Result<AnyPlayer<'a>, PlayerError> {
        let initial = self.initial.clone();
        Ok(match self.kind {
            PlayerKind::Greedy => AnyPlayer::Greedy(FixedInitialGreedy::new(corpus, initial)?),
            PlayerKind::Ranked => AnyPlayer::Ranked(EntropyRanked::new(corpus, initial)?),
            PlayerKind::Random => AnyPlayer::Random(RandomPlayer::new(corpus, seed)),
        })
    }

    /// The comparison line-up played by the `compare` command
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        let mut specs = vec![
            Self::new(PlayerKind::Random, Vec::new()),
            Self::new(PlayerKind::Greedy, Vec::new()),
            Self::new(PlayerKind::Ranked, Vec::new()),
        ];
        for opening in [
            ["snake", "batch", "chart"].as_slice(),
            &["handy", "crime", "lotus"],
            &["lunch", "metro", "daisy"],
            &["lunch", "metro"],
        ] {
            let words = opening.iter().filter_map(|w| Word::new(w).ok()).collect();
            specs.push(Self::new(PlayerKind::Greedy, words));
        }
        specs
    }

    /// Opening words joined by spaces
    #[must_use]
    pub fn initial_text(&self) -> String {
        self.initial
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.initial.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} [{}]", self.kind, self.initial_text())
        }
    }
}

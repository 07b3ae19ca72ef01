//! Fixed openings followed by the first consistent candidate

use super::{Player, PlayerError, StrategyExhausted, candidates, check_initial, opening};
use crate::core::Word;
use crate::game::GuessHistory;
use crate::wordlists::Corpus;

/// Plays its opening words unconditionally, then the first corpus word that
/// is still consistent with every feedback
///
/// # Examples
/// ```
/// use wordle_arena::core::Word;
/// use wordle_arena::game::{Game, GameConfig};
/// use wordle_arena::player::FixedInitialGreedy;
/// use wordle_arena::wordlists::Corpus;
///
/// let corpus = Corpus::from_strs(["daisy"], 5).unwrap();
/// let mut player = FixedInitialGreedy::new(&corpus, Vec::new()).unwrap();
/// let mut game = Game::new(GameConfig::default(), &corpus, Word::new("daisy").unwrap()).unwrap();
///
/// let outcome = game.play(&mut player).unwrap();
/// assert!(outcome.won);
/// assert_eq!(outcome.guesses, 1);
/// ```
pub struct FixedInitialGreedy<'a> {
    corpus: &'a Corpus,
    initial: Vec<Word>,
}

impl<'a> FixedInitialGreedy<'a> {
    /// # Errors
    /// Returns `PlayerError::InitialGuessLength` if an opening word does not
    /// match the corpus word length.
    pub fn new(corpus: &'a Corpus, initial: Vec<Word>) -> Result<Self, PlayerError> {
        check_initial(&initial, corpus.word_length())?;
        Ok(Self { corpus, initial })
    }

    #[must_use]
    pub fn initial(&self) -> &[Word] {
        &self.initial
    }
}

impl Player for FixedInitialGreedy<'_> {
    fn next_guess(&mut self, history: &GuessHistory) -> Result<Word, StrategyExhausted> {
        if let Some(word) = opening(&self.initial, history) {
            return Ok(word);
        }
        candidates(self.corpus, history)
            .first()
            .map(|&w| w.clone())
            .ok_or(StrategyExhausted)
    }
}

//! Fixed openings followed by the best-scoring consistent candidate
//!
//! Candidates are scored by the corpus letter frequencies: the sum of the
//! weights of a word's distinct letters. Scoring runs in parallel with rayon.

use super::{Player, PlayerError, StrategyExhausted, candidates, check_initial, opening};
use crate::core::Word;
use crate::game::GuessHistory;
use crate::wordlists::Corpus;
use rayon::prelude::*;

/// Highest-scoring candidate, ties broken by corpus order
fn select_best<'a>(corpus: &Corpus, candidates: &[&'a Word]) -> Option<(&'a Word, f64)> {
    let frequencies = corpus.frequencies();
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, &word)| (index, word, frequencies.score(word)))
        .max_by(|(i1, _, s1), (i2, _, s2)| s1.total_cmp(s2).then(i2.cmp(i1)))
        .map(|(_, word, score)| (word, score))
}

/// Plays its opening words, then the consistent candidate whose distinct
/// letters are most frequent in the corpus
pub struct EntropyRanked<'a> {
    corpus: &'a Corpus,
    initial: Vec<Word>,
}

impl<'a> EntropyRanked<'a> {
    /// # Errors
    /// Returns `PlayerError::InitialGuessLength` if an opening word does not
    /// match the corpus word length.
    pub fn new(corpus: &'a Corpus, initial: Vec<Word>) -> Result<Self, PlayerError> {
        check_initial(&initial, corpus.word_length())?;
        Ok(Self { corpus, initial })
    }

    /// Highest-scoring candidate, ties broken by corpus order
    ///
    /// Returns `None` if there are no candidates.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::player::EntropyRanked;
    /// use wordle_arena::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_strs(["sassy", "slate", "abbey"], 5).unwrap();
    /// let candidates: Vec<_> = corpus.iter().collect();
    /// let (best, score) = EntropyRanked::select_best(&corpus, &candidates).unwrap();
    /// assert_eq!(best.text(), "slate");
    /// assert!(score > 0.0);
    /// ```
    #[must_use]
    pub fn select_best<'w>(corpus: &Corpus, candidates: &[&'w Word]) -> Option<(&'w Word, f64)> {
        select_best(corpus, candidates)
    }
}

impl Player for EntropyRanked<'_> {
    fn next_guess(&mut self, history: &GuessHistory) -> Result<Word, StrategyExhausted> {
        if let Some(word) = opening(&self.initial, history) {
            return Ok(word);
        }
        let remaining = candidates(self.corpus, history);
        select_best(self.corpus, &remaining)
            .map(|(word, _)| word.clone())
            .ok_or(StrategyExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::{Game, GameConfig};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn prefers_distinct_frequent_letters() {
        let corpus = Corpus::from_strs(["abbey", "sassy", "slate", "stale"], 5).unwrap();
        let mut player = EntropyRanked::new(&corpus, Vec::new()).unwrap();
        // slate and stale tie; slate comes first
        assert_eq!(player.next_guess(&GuessHistory::new(5)).unwrap(), word("slate"));
    }

    #[test]
    fn ties_go_to_corpus_order() {
        let corpus = Corpus::from_strs(["stale", "slate", "least"], 5).unwrap();
        let candidates: Vec<&Word> = corpus.iter().collect();
        let (best, _) = select_best(&corpus, &candidates).unwrap();
        assert_eq!(best.text(), "stale");
    }

    #[test]
    fn empty_candidates_give_none() {
        let corpus = Corpus::from_strs(["stale"], 5).unwrap();
        assert!(select_best(&corpus, &[]).is_none());
    }

    #[test]
    fn openings_come_first() {
        let corpus = Corpus::from_strs(["abbey", "slate", "lunch"], 5).unwrap();
        let mut player = EntropyRanked::new(&corpus, vec![word("lunch")]).unwrap();
        assert_eq!(player.next_guess(&GuessHistory::new(5)).unwrap(), word("lunch"));
    }

    #[test]
    fn only_consistent_candidates_are_ranked() {
        let corpus = Corpus::from_strs(["abbey", "slate", "stale"], 5).unwrap();
        let mut player = EntropyRanked::new(&corpus, Vec::new()).unwrap();
        let mut history = GuessHistory::new(5);
        let guess = word("slate");
        history
            .push(guess.clone(), Feedback::evaluate(&word("abbey"), &guess))
            .unwrap();
        assert_eq!(player.next_guess(&history).unwrap(), word("abbey"));

        history
            .push(word("abbey"), Feedback::parse("-----").unwrap())
            .unwrap();
        assert_eq!(player.next_guess(&history), Err(StrategyExhausted));
    }

    #[test]
    fn solves_every_word_of_small_corpus() {
        let corpus = Corpus::from_strs(["lunch", "metro", "daisy", "dairy", "noisy", "glass"], 5).unwrap();
        for secret in &corpus {
            let mut player = EntropyRanked::new(&corpus, Vec::new()).unwrap();
            let config = GameConfig::new(5, corpus.len()).unwrap();
            let mut game = Game::new(config, &corpus, secret.clone()).unwrap();
            assert!(game.play(&mut player).unwrap().won, "failed on {secret}");
        }
    }
}

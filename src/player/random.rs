//! Uniformly random guesses, ignoring all feedback

use super::{Player, StrategyExhausted};
use crate::core::Word;
use crate::game::GuessHistory;
use crate::wordlists::Corpus;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Baseline player: any corpus word, every turn
pub struct RandomPlayer<'a> {
    corpus: &'a Corpus,
    rng: StdRng,
}

impl<'a> RandomPlayer<'a> {
    /// Seeded player, so experiments stay reproducible
    #[must_use]
    pub fn new(corpus: &'a Corpus, seed: u64) -> Self {
        Self {
            corpus,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer<'_> {
    fn next_guess(&mut self, _history: &GuessHistory) -> Result<Word, StrategyExhausted> {
        Ok(self.corpus.choose(&mut self.rng).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_guesses() {
        let corpus = Corpus::english(5).unwrap();
        let history = GuessHistory::new(5);
        let mut a = RandomPlayer::new(&corpus, 42);
        let mut b = RandomPlayer::new(&corpus, 42);
        for _ in 0..10 {
            assert_eq!(a.next_guess(&history), b.next_guess(&history));
        }
    }

    #[test]
    fn guesses_come_from_corpus() {
        let corpus = Corpus::from_strs(["lunch", "metro", "daisy"], 5).unwrap();
        let mut player = RandomPlayer::new(&corpus, 7);
        let history = GuessHistory::new(5);
        for _ in 0..20 {
            assert!(corpus.contains(&player.next_guess(&history).unwrap()));
        }
    }
}

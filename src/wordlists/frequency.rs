//! Letter frequency weights for a corpus
//!
//! Each word contributes its distinct letters once. Weights are normalized so
//! they sum to 1 across the alphabet seen in the corpus.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Normalized per-letter frequencies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterFrequencies {
    weights: FxHashMap<char, f64>,
}

impl LetterFrequencies {
    /// Count the distinct letters of every word and normalize
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    /// use wordle_arena::wordlists::LetterFrequencies;
    ///
    /// let words = [Word::new("aab").unwrap(), Word::new("abc").unwrap()];
    /// let freq = LetterFrequencies::from_words(&words);
    ///
    /// // a: 2, b: 2, c: 1 out of 5 distinct-letter occurrences
    /// assert!((freq.weight('a') - 0.4).abs() < 1e-9);
    /// assert!((freq.weight('c') - 0.2).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in words {
            for letter in word.unique_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        let total: usize = counts.values().sum();
        if total == 0 {
            return Self::default();
        }

        let weights = counts
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / total as f64))
            .collect();
        Self { weights }
    }

    /// Weight of a letter (0 for letters never seen)
    #[must_use]
    pub fn weight(&self, letter: char) -> f64 {
        self.weights.get(&letter).copied().unwrap_or(0.0)
    }

    /// Sum of the weights of the distinct letters of `word`
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.unique_letters().into_iter().map(|c| self.weight(c)).sum()
    }

    /// Sum of the weights of the distinct letters across several words
    ///
    /// A letter shared by two words only counts once, so letter-disjoint
    /// opening sequences score higher.
    #[must_use]
    pub fn score_words(&self, words: &[&Word]) -> f64 {
        let mut seen: Vec<char> = Vec::new();
        for word in words {
            for &letter in word.letters() {
                if !seen.contains(&letter) {
                    seen.push(letter);
                }
            }
        }
        seen.into_iter().map(|c| self.weight(c)).sum()
    }

    /// Letters sorted by weight, heaviest first (ties alphabetical)
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, f64)> = self.weights.iter().map(|(&c, &w)| (c, w)).collect();
        ranked.sort_by(|(ca, wa), (cb, wb)| wb.total_cmp(wa).then(ca.cmp(cb)));
        ranked
    }
}

//! Accumulated knowledge from feedback
//!
//! `ConstraintState` folds every (guess, feedback) pair of a game into a predicate
//! that tells whether a word could still be the secret.

use super::{Feedback, Mark, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Error returned when a feedback cannot be folded into the state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("guess has {guess} letters but feedback has {feedback} marks")]
    LengthMismatch { guess: usize, feedback: usize },
    #[error("expected {expected}-letter guesses, got {actual}")]
    WrongWordLength { expected: usize, actual: usize },
}

/// Known bounds on how often a letter occurs in the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LetterBounds {
    min: usize,
    /// `Some(0)` means the letter is excluded entirely
    max: Option<usize>,
}

impl LetterBounds {
    fn admits(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// Constraints derived from all feedback seen in a game
///
/// The secret always satisfies the state, and every update can only shrink
/// the set of matching words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    length: usize,
    /// Letter confirmed at each position
    known: Vec<Option<char>>,
    /// Letters ruled out at each position
    excluded_at: Vec<FxHashSet<char>>,
    bounds: FxHashMap<char, LetterBounds>,
}

impl ConstraintState {
    /// Empty state for words of `length` letters; matches every word of that length
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            known: vec![None; length],
            excluded_at: vec![FxHashSet::default(); length],
            bounds: FxHashMap::default(),
        }
    }

    /// Configured word length
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Fold a guess and its feedback into the state
    ///
    /// # Errors
    /// Returns `ConstraintError` if the guess and feedback lengths differ or do not
    /// match the configured length. The state is left unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{ConstraintState, Feedback, Word};
    ///
    /// let secret = Word::new("daisy").unwrap();
    /// let guess = Word::new("lunch").unwrap();
    ///
    /// let mut state = ConstraintState::new(5);
    /// state.update(&guess, &Feedback::evaluate(&secret, &guess)).unwrap();
    ///
    /// assert!(state.matches(&secret));
    /// assert!(!state.matches(&Word::new("lucky").unwrap()));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), ConstraintError> {
        if guess.len() != feedback.len() {
            return Err(ConstraintError::LengthMismatch {
                guess: guess.len(),
                feedback: feedback.len(),
            });
        }
        if guess.len() != self.length {
            return Err(ConstraintError::WrongWordLength {
                expected: self.length,
                actual: guess.len(),
            });
        }

        // Correct + Present per letter in this guess, and whether any copy came back Absent
        let mut confirmed: FxHashMap<char, usize> = FxHashMap::default();
        let mut capped: FxHashSet<char> = FxHashSet::default();

        for (i, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => {
                    self.known[i] = Some(letter);
                    *confirmed.entry(letter).or_insert(0) += 1;
                }
                Mark::Present => {
                    self.excluded_at[i].insert(letter);
                    *confirmed.entry(letter).or_insert(0) += 1;
                }
                Mark::Absent => {
                    // An Absent copy is never at its own position either
                    self.excluded_at[i].insert(letter);
                    capped.insert(letter);
                }
            }
        }

        for (&letter, &count) in &confirmed {
            let bounds = self.bounds.entry(letter).or_default();
            bounds.min = bounds.min.max(count);
        }

        for letter in capped {
            let count = confirmed.get(&letter).copied().unwrap_or(0);
            let bounds = self.bounds.entry(letter).or_default();
            bounds.max = Some(bounds.max.map_or(count, |max| max.min(count)));
        }

        Ok(())
    }

    /// Test whether `word` is consistent with every feedback folded in so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.length {
            return false;
        }

        for (i, &letter) in word.letters().iter().enumerate() {
            if let Some(known) = self.known[i] {
                if known != letter {
                    return false;
                }
            }
            if self.excluded_at[i].contains(&letter) {
                return false;
            }
        }

        self.bounds
            .iter()
            .all(|(&letter, &bounds)| bounds.admits(word.count_of(letter)))
    }

    /// Letter known at `position`, if any
    #[must_use]
    pub fn known_at(&self, position: usize) -> Option<char> {
        self.known.get(position).copied().flatten()
    }

    /// Minimum number of occurrences of `letter` in the secret
    #[must_use]
    pub fn min_count(&self, letter: char) -> usize {
        self.bounds.get(&letter).map_or(0, |b| b.min)
    }

    /// Maximum number of occurrences of `letter`, if capped
    #[must_use]
    pub fn max_count(&self, letter: char) -> Option<usize> {
        self.bounds.get(&letter).and_then(|b| b.max)
    }

    /// True if `letter` cannot appear in the secret at all
    #[must_use]
    pub fn is_excluded(&self, letter: char) -> bool {
        self.max_count(letter) == Some(0)
    }

    /// True if nothing has been learned yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.bounds.is_empty()
            && self.known.iter().all(Option::is_none)
            && self.excluded_at.iter().all(FxHashSet::is_empty)
    }
}

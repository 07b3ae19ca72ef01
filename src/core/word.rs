//! Wordle word representation
//!
//! A Word stores a lowercase word along with its letters for feedback calculation.
//! The length is not fixed: the game configuration decides how long words must be.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A case-normalized word made of alphabetic characters
///
/// Letters are kept as `char` so alternate-language word lists (umlauts, ß)
/// work the same way English ones do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word contains non-alphabetic character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string of any length
    ///
    /// The text is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Create a new Word and check it has exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how often `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct letters in first-occurrence order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.letters.len());
        for &ch in &self.letters {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }

    /// True if no letter appears twice
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.unique_letters().len() == self.letters.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  lunch\n").unwrap().text(), "lunch");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacter(' ')));
    }

    #[test]
    fn word_with_length_checks_length() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert_eq!(
            Word::with_length("lunches", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 7
            })
        );
    }

    #[test]
    fn word_counts_letters_not_bytes() {
        let word = Word::new("RÜBÖL").unwrap();
        assert_eq!(word.text(), "rüböl");
        assert_eq!(word.len(), 5);
        assert_eq!(word.letter_at(1), 'ü');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.len(), 4);
        assert_eq!(word.count_of('e'), 2);
        assert_eq!(word.count_of('z'), 0);
    }

    #[test]
    fn word_unique_letters() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.unique_letters(), vec!['s', 'a', 'y']);
        assert!(!word.has_distinct_letters());
        assert!(Word::new("lunch").unwrap().has_distinct_letters());
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Daisy".parse().unwrap();
        assert_eq!(format!("{word}"), "daisy");
    }
}

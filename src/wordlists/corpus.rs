//! Fixed-length word corpus
//!
//! The corpus is the dictionary a game is played over: every secret is drawn
//! from it, strict games only accept guesses from it, and players filter it.

use super::{ENGLISH, Language, LetterFrequencies, loader};
use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a corpus
///
/// All of these are configuration errors: they surface before any game runs.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("no {length}-letter words available")]
    Empty { length: usize },
    #[error("word {word:?} has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid word in corpus: {0}")]
    InvalidWord(#[from] WordError),
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("no embedded word list for {0}; pass a word list file")]
    NoEmbeddedList(Language),
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An ordered, de-duplicated set of words that all have the same length
///
/// Read-only once built. Iteration order is stable, which keeps experiments
/// reproducible.
#[derive(Debug, Clone)]
pub struct Corpus {
    length: usize,
    words: Vec<Word>,
    lookup: FxHashSet<String>,
    frequencies: LetterFrequencies,
}

impl Corpus {
    /// Build a corpus from words that must all have `length` letters
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `CorpusError::LengthMismatch` for the first word of the wrong
    /// length, or `CorpusError::Empty` if no words are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    /// use wordle_arena::wordlists::Corpus;
    ///
    /// let words = ["lunch", "metro", "daisy"].map(|w| Word::new(w).unwrap());
    /// let corpus = Corpus::new(words, 5).unwrap();
    /// assert_eq!(corpus.len(), 3);
    ///
    /// let bad = ["lunch", "mat"].map(|w| Word::new(w).unwrap());
    /// assert!(Corpus::new(bad, 5).is_err());
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>, length: usize) -> Result<Self, CorpusError> {
        if length == 0 {
            return Err(CorpusError::ZeroLength);
        }

        let mut lookup = FxHashSet::default();
        let mut kept = Vec::new();
        for word in words {
            if word.len() != length {
                return Err(CorpusError::LengthMismatch {
                    actual: word.len(),
                    word: word.text().to_string(),
                    expected: length,
                });
            }
            if lookup.insert(word.text().to_string()) {
                kept.push(word);
            }
        }

        if kept.is_empty() {
            return Err(CorpusError::Empty { length });
        }

        let frequencies = LetterFrequencies::from_words(&kept);
        Ok(Self {
            length,
            words: kept,
            lookup,
            frequencies,
        })
    }

    /// Parse and validate raw strings into a corpus
    ///
    /// # Errors
    /// Returns `CorpusError::InvalidWord` for malformed entries, plus any error from [`Corpus::new`].
    pub fn from_strs<S: AsRef<str>>(
        words: impl IntoIterator<Item = S>,
        length: usize,
    ) -> Result<Self, CorpusError> {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words, length)
    }

    /// Keep only the words with `length` letters, sorted alphabetically
    ///
    /// This is the load/filter step for mixed-length dictionaries.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no word has the requested length.
    pub fn filtered(words: impl IntoIterator<Item = Word>, length: usize) -> Result<Self, CorpusError> {
        let mut words: Vec<Word> = words.into_iter().filter(|w| w.len() == length).collect();
        words.sort();
        Self::new(words, length)
    }

    /// The embedded English list filtered to `length` letters
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the list has no word of that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::wordlists::Corpus;
    ///
    /// let corpus = Corpus::english(5).unwrap();
    /// assert!(corpus.contains_text("daisy"));
    /// assert!(corpus.iter().all(|w| w.len() == 5));
    /// ```
    pub fn english(length: usize) -> Result<Self, CorpusError> {
        Self::filtered(loader::words_from_slice(ENGLISH), length)
    }

    /// Load a corpus for a language, from a file when one is given
    ///
    /// Only English has an embedded list; other languages need `path`.
    ///
    /// # Errors
    /// Returns `CorpusError` if the file cannot be read, no list exists for the
    /// language, or no word has the requested length.
    pub fn load(language: Language, path: Option<&Path>, length: usize) -> Result<Self, CorpusError> {
        let corpus = match (path, language) {
            (Some(path), _) => Self::filtered(loader::load_from_file(path)?, length)?,
            (None, Language::English) => Self::english(length)?,
            (None, other) => return Err(CorpusError::NoEmbeddedList(other)),
        };
        log::info!(
            "loaded {} {}-letter words ({language})",
            corpus.len(),
            corpus.word_length()
        );
        Ok(corpus)
    }

    /// Letters per word
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty corpora are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.lookup.contains(text)
    }

    /// Position of `word` in corpus order
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Letter frequencies computed once over the whole corpus
    #[must_use]
    pub const fn frequencies(&self) -> &LetterFrequencies {
        &self.frequencies
    }

    /// Pick a uniformly random word using the caller's RNG
    ///
    /// # Panics
    /// Never panics: the corpus is non-empty by construction.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("corpus is non-empty by construction")
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_keeps_order_and_drops_duplicates() {
        let corpus = Corpus::from_strs(["metro", "lunch", "metro", "daisy"], 5).unwrap();
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["metro", "lunch", "daisy"]);
        assert_eq!(corpus.position(&Word::new("daisy").unwrap()), Some(2));
    }

    #[test]
    fn new_rejects_wrong_length() {
        let err = Corpus::from_strs(["lunch", "bench", "cat"], 5).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::LengthMismatch {
                expected: 5,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_empty_and_zero_length() {
        assert!(matches!(
            Corpus::new(Vec::new(), 5),
            Err(CorpusError::Empty { length: 5 })
        ));
        assert!(matches!(
            Corpus::from_strs(["a"], 0),
            Err(CorpusError::ZeroLength)
        ));
    }

    #[test]
    fn from_strs_rejects_invalid_word() {
        assert!(matches!(
            Corpus::from_strs(["lunch", "l4nch"], 5),
            Err(CorpusError::InvalidWord(_))
        ));
    }

    #[test]
    fn filtered_sorts_and_keeps_length() {
        let words = loader::words_from_slice(&["metro", "cat", "daisy", "lunches", "apple"]);
        let corpus = Corpus::filtered(words, 5).unwrap();
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "daisy", "metro"]);
    }

    #[test]
    fn english_has_all_configured_lengths() {
        for length in [4, 5, 6] {
            let corpus = Corpus::english(length).unwrap();
            assert!(corpus.len() > 100, "{length}-letter list too small");
            assert!(corpus.iter().all(|w| w.len() == length));
        }
        assert!(matches!(
            Corpus::english(15),
            Err(CorpusError::Empty { length: 15 })
        ));
    }

    #[test]
    fn load_without_file_needs_embedded_list() {
        assert!(Corpus::load(Language::English, None, 5).is_ok());
        assert!(matches!(
            Corpus::load(Language::German, None, 5),
            Err(CorpusError::NoEmbeddedList(Language::German))
        ));
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let corpus = Corpus::english(5).unwrap();
        let a = corpus.choose(&mut StdRng::seed_from_u64(7)).clone();
        let b = corpus.choose(&mut StdRng::seed_from_u64(7)).clone();
        assert_eq!(a, b);
        assert!(corpus.contains(&a));
    }

    #[test]
    fn frequencies_cover_corpus_letters() {
        let corpus = Corpus::from_strs(["lunch", "metro"], 5).unwrap();
        assert!(corpus.frequencies().weight('l') > 0.0);
        assert!(corpus.frequencies().weight('z').abs() < f64::EPSILON);
    }
}

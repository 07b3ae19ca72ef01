//! Word lists for Wordle games
//!
//! An English list is embedded in the binary at build time; other languages
//! are loaded from a file supplied by the user.

mod corpus;
mod embedded;
mod frequency;
pub mod loader;

pub use corpus::{Corpus, CorpusError};
pub use embedded::{ENGLISH, ENGLISH_COUNT};
pub use frequency::LetterFrequencies;

use std::fmt;

/// Language of the word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    /// English (embedded list)
    #[default]
    #[value(name = "en")]
    English,
    /// German (requires a word list file)
    #[value(name = "de")]
    German,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::German => write!(f, "de"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn english_words_are_lowercase_letters() {
        for &word in ENGLISH {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn english_contains_classic_openers() {
        for word in ["lunch", "metro", "daisy", "handy", "crime", "lotus"] {
            assert!(ENGLISH.contains(&word), "{word} missing");
        }
    }

    #[test]
    fn language_display() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::German.to_string(), "de");
        assert_eq!(Language::default(), Language::English);
    }
}

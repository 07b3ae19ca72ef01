//! Word analysis command
//!
//! Scores a word by the corpus letter frequencies and ranks it.

use super::CommandError;
use crate::core::Word;
use crate::wordlists::Corpus;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub score: f64,
    /// 1-based position among corpus words by score
    pub rank: usize,
    pub total: usize,
    pub in_corpus: bool,
    /// Weights of the word's distinct letters
    pub letters: Vec<(char, f64)>,
    /// Highest-scoring corpus words
    pub best: Vec<(Word, f64)>,
}

/// Analyze how much of the corpus alphabet a word covers
///
/// # Errors
///
/// Returns an error if the word is malformed or has the wrong length.
pub fn analyze_word(corpus: &Corpus, word: &str, top: usize) -> Result<AnalysisResult, CommandError> {
    let word = Word::with_length(word, corpus.word_length())?;
    let frequencies = corpus.frequencies();
    let score = frequencies.score(&word);

    let mut scored: Vec<(&Word, f64)> = corpus.iter().map(|w| (w, frequencies.score(w))).collect();
    let rank = scored.iter().filter(|(_, s)| *s > score).count() + 1;
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let letters = word
        .unique_letters()
        .into_iter()
        .map(|c| (c, frequencies.weight(c)))
        .collect();

    Ok(AnalysisResult {
        in_corpus: corpus.contains(&word),
        word,
        score,
        rank,
        total: corpus.len(),
        letters,
        best: scored
            .into_iter()
            .take(top)
            .map(|(w, s)| (w.clone(), s))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_strs(["sassy", "slate", "abbey", "lunch"], 5).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word(&corpus(), "slate", 2).unwrap();
        assert!(result.in_corpus);
        assert_eq!(result.rank, 1);
        assert_eq!(result.total, 4);
        assert_eq!(result.letters.len(), 5);
        assert_eq!(result.best[0].0.text(), "slate");
        assert_eq!(result.best.len(), 2);
    }

    #[test]
    fn repeated_letters_score_once() {
        let result = analyze_word(&corpus(), "sassy", 3).unwrap();
        assert_eq!(result.letters.len(), 3);
        let sum: f64 = result.letters.iter().map(|(_, w)| w).sum();
        assert!((sum - result.score).abs() < 1e-12);
    }

    #[test]
    fn words_outside_corpus_are_ranked_too() {
        let result = analyze_word(&corpus(), "zzzzz", 1).unwrap();
        assert!(!result.in_corpus);
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.rank, 5);
    }

    #[test]
    fn wrong_length_is_error() {
        assert!(matches!(
            analyze_word(&corpus(), "cat", 1),
            Err(CommandError::Word(_))
        ));
    }
}

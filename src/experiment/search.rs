//! Opening word search
//!
//! Finds sequences of `k` letter-disjoint opening words, ranks them by the
//! corpus letter frequencies of their combined letters, and plays the greedy
//! experiment for the best `n` of them. Results are written as TSV so they
//! can be plotted elsewhere.

use super::{Experiment, ExperimentError};
use crate::core::Word;
use crate::player::{PlayerKind, PlayerSpec};
use crate::wordlists::Corpus;
use rayon::prelude::*;
use std::io::{self, Write};

/// An opening sequence and its frequency score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOpening<'a> {
    pub words: Vec<&'a Word>,
    pub score: f64,
}

/// One evaluated opening sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRow {
    pub words: Vec<Word>,
    pub score: f64,
    pub success: f64,
    pub speed: f64,
}

impl SearchRow {
    /// Tab-separated header for `k` opening words
    #[must_use]
    pub fn tsv_header(k: usize) -> String {
        let mut columns: Vec<String> = (0..k).map(|i| format!("word{i}")).collect();
        columns.extend(["score", "success", "speed"].map(String::from));
        columns.join("\t")
    }

    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut fields: Vec<String> = self.words.iter().map(|w| w.text().to_string()).collect();
        fields.push(format!("{:.6}", self.score));
        fields.push(format!("{:.6}", self.success));
        fields.push(format!("{:.6}", self.speed));
        fields.join("\t")
    }
}

/// True if no letter appears in both words
fn disjoint(a: &Word, b: &Word) -> bool {
    !a.letters().iter().any(|&c| b.has_letter(c))
}

/// Every `k`-word sequence of mutually letter-disjoint words, in corpus order
///
/// For `k == 1` every word qualifies. For larger `k` only words without
/// repeated letters are used, and each sequence lists its words in corpus
/// order, so every combination appears once.
///
/// # Examples
/// ```
/// use wordle_arena::experiment::search::disjoint_sequences;
/// use wordle_arena::wordlists::Corpus;
///
/// let corpus = Corpus::from_strs(["lunch", "metro", "daisy", "sassy", "lotus"], 5).unwrap();
/// let pairs = disjoint_sequences(&corpus, 2);
/// let texts: Vec<String> = pairs
///     .iter()
///     .map(|p| format!("{} {}", p[0], p[1]))
///     .collect();
/// // sassy repeats a letter, lotus shares letters with the others
/// assert_eq!(texts, ["lunch metro", "lunch daisy", "metro daisy"]);
/// ```
#[must_use]
pub fn disjoint_sequences(corpus: &Corpus, k: usize) -> Vec<Vec<&Word>> {
    if k == 0 {
        return Vec::new();
    }
    if k == 1 {
        return corpus.iter().map(|w| vec![w]).collect();
    }

    let words: Vec<&Word> = corpus.iter().filter(|w| w.has_distinct_letters()).collect();

    // Each partial sequence keeps the words that may still extend it
    let mut level: Vec<(Vec<&Word>, Vec<&Word>)> = words
        .iter()
        .enumerate()
        .map(|(i, &left)| {
            let rest = words[i + 1..]
                .iter()
                .copied()
                .filter(|right| disjoint(left, right))
                .collect();
            (vec![left], rest)
        })
        .collect();

    for _ in 2..k {
        level = level
            .into_iter()
            .flat_map(|(prefix, rest)| {
                rest.iter()
                    .enumerate()
                    .map(|(i, &next)| {
                        let mut extended = prefix.clone();
                        extended.push(next);
                        let remaining = rest[i + 1..]
                            .iter()
                            .copied()
                            .filter(|w| disjoint(next, w))
                            .collect();
                        (extended, remaining)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
    }

    level
        .into_iter()
        .flat_map(|(prefix, rest)| {
            rest.into_iter().map(move |last| {
                let mut sequence = prefix.clone();
                sequence.push(last);
                sequence
            })
        })
        .collect()
}

/// The `n` best `k`-word openings by combined letter frequency
///
/// Ties keep enumeration order. `None` keeps every sequence.
#[must_use]
pub fn top_openings(corpus: &Corpus, k: usize, n: Option<usize>) -> Vec<ScoredOpening<'_>> {
    let frequencies = corpus.frequencies();
    let mut scored: Vec<ScoredOpening<'_>> = disjoint_sequences(corpus, k)
        .into_par_iter()
        .map(|words| {
            let score = frequencies.score_words(&words);
            ScoredOpening { words, score }
        })
        .collect();
    log::debug!("{} {k}-word openings to rank", scored.len());

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(n) = n {
        scored.truncate(n);
    }
    scored
}

/// Play the greedy experiment for each of the best openings
///
/// `experiment` decides length, guess limit, parallelism and progress.
///
/// # Errors
/// Returns `ExperimentError` if an opening is rejected by the game, for
/// example under a strict dictionary.
pub fn evaluate_openings(
    experiment: &Experiment<'_>,
    openings: &[ScoredOpening<'_>],
) -> Result<Vec<SearchRow>, ExperimentError> {
    openings
        .iter()
        .map(|opening| {
            let words: Vec<Word> = opening.words.iter().map(|&w| w.clone()).collect();
            let spec = PlayerSpec::new(PlayerKind::Greedy, words.clone());
            let stats = experiment.run_spec(&spec, 0)?;
            log::debug!(
                "{spec}: score {:.4} success {:.4} speed {:.4}",
                opening.score,
                stats.success_rate(),
                stats.speed()
            );
            Ok(SearchRow {
                words,
                score: opening.score,
                success: stats.success_rate(),
                speed: stats.speed(),
            })
        })
        .collect()
}

/// Write rows as TSV with a header
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_tsv<W: Write>(mut out: W, k: usize, rows: &[SearchRow]) -> io::Result<()> {
    writeln!(out, "{}", SearchRow::tsv_header(k))?;
    for row in rows {
        writeln!(out, "{}", row.to_tsv())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn corpus() -> Corpus {
        Corpus::from_strs(
            ["lunch", "metro", "daisy", "sassy", "lotus", "frame", "plate", "brown"],
            5,
        )
        .unwrap()
    }

    fn texts(sequence: &[&Word]) -> Vec<String> {
        sequence.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn single_words_include_repeated_letters() {
        let corpus = corpus();
        let singles = disjoint_sequences(&corpus, 1);
        assert_eq!(singles.len(), corpus.len());
    }

    #[test]
    fn sequences_are_mutually_disjoint() {
        let corpus = corpus();
        for k in 2..=3 {
            let sequences = disjoint_sequences(&corpus, k);
            assert!(!sequences.is_empty());
            for sequence in &sequences {
                assert_eq!(sequence.len(), k);
                for (i, a) in sequence.iter().enumerate() {
                    assert!(a.has_distinct_letters());
                    for b in &sequence[i + 1..] {
                        assert!(disjoint(a, b), "{a} and {b} overlap");
                    }
                }
            }
        }
    }

    #[test]
    fn triples_found() {
        let corpus = corpus();
        let triples: Vec<Vec<String>> = disjoint_sequences(&corpus, 3)
            .iter()
            .map(|s| texts(s))
            .collect();
        assert!(triples.contains(&vec![
            "lunch".to_string(),
            "metro".to_string(),
            "daisy".to_string()
        ]));
        // sassy repeats s and never pairs
        assert!(triples.iter().flatten().all(|w| w != "sassy"));
    }

    #[test]
    fn zero_k_is_empty() {
        assert!(disjoint_sequences(&corpus(), 0).is_empty());
    }

    #[test]
    fn top_openings_sorted_and_truncated() {
        let corpus = corpus();
        let top = top_openings(&corpus, 2, Some(3));
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));

        let all = top_openings(&corpus, 2, None);
        assert_eq!(all.len(), disjoint_sequences(&corpus, 2).len());
        assert!((all[0].score - top[0].score).abs() < f64::EPSILON);
    }

    #[test]
    fn evaluate_and_write_tsv() {
        let corpus = corpus();
        let config = GameConfig::new(5, corpus.len() + 2).unwrap();
        let experiment = Experiment::new(&corpus, config);
        let top = top_openings(&corpus, 2, Some(2));
        let rows = evaluate_openings(&experiment, &top).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| (r.success - 1.0).abs() < f64::EPSILON));

        let mut out = Vec::new();
        write_tsv(&mut out, 2, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("word0\tword1\tscore\tsuccess\tspeed"));
        assert_eq!(lines.count(), 2);
        assert_eq!(rows[0].to_tsv().split('\t').count(), 5);
    }
}

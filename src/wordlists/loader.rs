//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::CorpusError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One entry per line. Blank lines, `#` comments and lines containing a comma
/// are skipped; only the first whitespace-separated token of a line is used, so
/// frequency-annotated dictionaries load as well. Files that are not valid UTF-8
/// are decoded as ISO-8859-1. Invalid entries are skipped.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_arena::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_de.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().into_iter().map(char::from).collect());

    let words: Vec<Word> = parse_lines(&content).collect();
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text with the same rules as [`load_from_file`]
pub fn parse_lines(content: &str) -> impl Iterator<Item = Word> + '_ {
    content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.contains(',') {
            return None;
        }
        let token = trimmed.split_whitespace().next()?;
        Word::new(token).ok()
    })
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_arena::wordlists::loader::words_from_slice;
/// use wordle_arena::wordlists::ENGLISH;
///
/// let words = words_from_slice(ENGLISH);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "it's", "", "sl4te", "Lunch"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "lunch");
    }

    #[test]
    fn parse_lines_skips_comments_and_takes_first_token() {
        let text = "# header\n\nHaus 1234\nrüböl\nwelpe, alt\n  ampex  \n";
        let words: Vec<String> = parse_lines(text).map(|w| w.text().to_string()).collect();
        assert_eq!(words, vec!["haus", "rüböl", "ampex"]);
    }

    #[test]
    fn load_from_file_reads_latin1() {
        let path = std::env::temp_dir().join(format!("wordle_arena_latin1_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            // "rüböl" in ISO-8859-1 followed by a plain word
            file.write_all(b"r\xfcb\xf6l\nwelpe\n").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["rüböl", "welpe"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }
}

//! Wordle feedback calculation and representation
//!
//! Feedback holds one [`Mark`] per letter of the guess:
//! - Correct: letter in the right position (green)
//! - Present: letter in the secret, wrong position (yellow)
//! - Absent: letter not in the secret, or all its occurrences already used (gray)

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and
    /// '-'/'_'/'.'/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when feedback text cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must not be empty")]
    Empty,
    #[error("invalid feedback character {0:?} (use G/Y/- or 🟩🟨⬜)")]
    InvalidCharacter(char),
}

/// Feedback for a whole guess, one mark per position
///
/// Produced once per guess and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All-correct feedback of the given length
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![Mark::Correct; length])
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Start with every position Absent
    /// 2. First pass: mark exact matches Correct and consume that secret letter
    /// 3. Second pass, left to right: mark Present while the secret still has
    ///    an unconsumed occurrence of the letter
    ///
    /// Both words are expected to have the same length. Otherwise the feedback
    /// has one mark per letter of the shorter word; all secret letters still
    /// count towards Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Feedback, Word};
    ///
    /// let secret = Word::new("glass").unwrap();
    /// let guess = Word::new("sassy").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// // S(yellow) A(yellow) S(gray) S(green) Y(gray)
    /// assert_eq!(feedback.to_string(), "YY-G-");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let length = secret.len().min(guess.len());
        let mut marks = vec![Mark::Absent; length];
        let mut available = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&s, &g)) in secret.letters().iter().zip(guess.letters()).enumerate() {
            if s == g {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, while unconsumed occurrences remain
        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g) {
                if *count > 0 {
                    *mark = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the Correct marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Count the Present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` for empty input or unknown characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FeedbackError::Empty);
        }

        s.chars()
            .map(|ch| Mark::from_char(ch).ok_or(FeedbackError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

/// Compact text form: G, Y and -
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(secret: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("fghij", "abcde");
        assert_eq!(feedback.to_string(), "-----");
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_self_is_solved() {
        for word in ["crane", "slate", "sassy", "aaaaa", "lunch", "rüböl"] {
            let feedback = eval(word, word);
            assert!(feedback.is_solved(), "{word} against itself");
            assert_eq!(feedback, Feedback::solved(word.chars().count()));
        }
    }

    #[test]
    fn feedback_correct_count_equals_literal_matches() {
        let pairs = [
            ("crane", "slate"),
            ("glass", "sassy"),
            ("floor", "robot"),
            ("erase", "speed"),
            ("daisy", "lunch"),
            ("metro", "motor"),
        ];
        for (secret, guess) in pairs {
            let matches = secret
                .chars()
                .zip(guess.chars())
                .filter(|(a, b)| a == b)
                .count();
            assert_eq!(eval(secret, guess).count_correct(), matches, "{guess} vs {secret}");
        }
    }

    #[test]
    fn feedback_sassy_against_glass() {
        // glass has two s; sassy has three
        let feedback = eval("glass", "sassy");
        let s_hits = feedback
            .marks()
            .iter()
            .zip("sassy".chars())
            .filter(|&(&m, c)| c == 's' && m != Mark::Absent)
            .count();
        assert_eq!(s_hits, 2);
        assert_eq!(
            feedback.marks(),
            &[
                Mark::Present,
                Mark::Present,
                Mark::Absent,
                Mark::Correct,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn feedback_green_takes_priority_over_earlier_yellow() {
        // floor: the second o of robot is exact, the first one still finds the other o
        assert_eq!(eval("floor", "robot").to_string(), "YY-G-");
        // abbey: the exact b is consumed first, leaving one b for the earlier position
        assert_eq!(eval("abbey", "kebab").to_string(), "-YGYY");
    }

    #[test]
    fn feedback_duplicate_guess_single_secret_letter() {
        // speed vs erase: two e in both words, s present
        assert_eq!(eval("erase", "speed").to_string(), "Y-YY-");
        // one e in the secret, the exact one wins
        assert_eq!(eval("crane", "eerie").to_string(), "--Y-G");
    }

    #[test]
    fn feedback_crane_against_slate() {
        assert_eq!(eval("slate", "crane").to_string(), "--G-G");
    }

    #[test]
    fn parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬛").unwrap();
        let p3 = Feedback::parse("gyg_.").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.len(), 5);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Feedback::parse(""), Err(FeedbackError::Empty));
        assert_eq!(
            Feedback::parse("GXG"),
            Err(FeedbackError::InvalidCharacter('X'))
        );
    }

    #[test]
    fn emoji_round_trip_display() {
        let feedback = Feedback::parse("GY-").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜");
        assert_eq!(feedback.to_string(), "GY-");
    }

    #[test]
    fn long_repeated_letter_word_against_itself() {
        let word = Word::new("a".repeat(300)).unwrap();
        let feedback = Feedback::evaluate(&word, &word);
        assert!(feedback.is_solved());
        assert_eq!(feedback.len(), 300);
    }

    #[test]
    fn unequal_lengths_use_the_shorter_word() {
        let feedback = eval("lunch", "lunches");
        assert_eq!(feedback.to_string(), "GGGGG");
        // y is still found among the secret letters past the guess
        assert_eq!(eval("daisy", "day").to_string(), "GGY");
    }

    #[test]
    fn empty_feedback_is_not_solved() {
        assert!(!Feedback::new(Vec::new()).is_solved());
    }
}

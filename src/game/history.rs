//! Guess history of a single game
//!
//! The history owns the game's constraint state so the two can never drift apart.

use crate::core::{ConstraintError, ConstraintState, Feedback, Word};

/// One played guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Ordered guesses of one game plus everything learned from them
#[derive(Debug, Clone)]
pub struct GuessHistory {
    turns: Vec<Turn>,
    constraints: ConstraintState,
}

impl GuessHistory {
    /// Empty history for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            turns: Vec::new(),
            constraints: ConstraintState::new(length),
        }
    }

    /// Append a turn and fold its feedback into the constraints
    ///
    /// # Errors
    /// Returns `ConstraintError` on a length mismatch; nothing is recorded then.
    pub fn push(&mut self, guess: Word, feedback: Feedback) -> Result<(), ConstraintError> {
        self.constraints.update(&guess, &feedback)?;
        self.turns.push(Turn { guess, feedback });
        Ok(())
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(secret: &str, guess: &str) -> (Word, Feedback) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        (guess, feedback)
    }

    #[test]
    fn push_updates_constraints() {
        let mut history = GuessHistory::new(5);
        let (guess, feedback) = turn("daisy", "lunch");
        history.push(guess.clone(), feedback).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| &t.guess), Some(&guess));
        assert!(history.constraints().is_excluded('l'));
    }

    #[test]
    fn push_rejects_mismatch_without_recording() {
        let mut history = GuessHistory::new(5);
        let guess = Word::new("lunch").unwrap();
        assert!(history.push(guess, Feedback::parse("GG").unwrap()).is_err());
        assert!(history.is_empty());
        assert!(history.constraints().is_unconstrained());
    }
}

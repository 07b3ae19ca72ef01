//! Word solving command
//!
//! Lets a player solve a chosen secret and records every step.

use super::CommandError;
use crate::core::{Feedback, Word};
use crate::game::{Game, GameConfig, GameError, GameState};
use crate::player::{Player, PlayerSpec};
use crate::wordlists::Corpus;

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub player: String,
    pub steps: Vec<SolveStep>,
    pub won: bool,
    /// The player ran out of candidates
    pub exhausted: bool,
}

/// A single guess step in the solution
pub struct SolveStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play one game against `secret` with the player described by `spec`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is malformed, has the wrong length or is not in the corpus
/// - The player cannot be built or plays an invalid guess
pub fn solve_word(
    corpus: &Corpus,
    config: GameConfig,
    spec: &PlayerSpec,
    seed: u64,
    secret: &str,
) -> Result<SolveResult, CommandError> {
    let secret = Word::new(secret)?;
    let mut game = Game::new(config, corpus, secret)?;
    if !corpus.contains(game.secret()) {
        return Err(GameError::UnknownWord(game.secret().text().to_string()).into());
    }
    let mut player = spec.build(corpus, seed)?;

    let mut steps = Vec::new();
    let mut exhausted = false;
    while game.state() == GameState::AwaitingGuess {
        let candidates_before = game.remaining_candidates().len();
        let Ok(guess) = player.next_guess(game.history()) else {
            log::warn!("{spec} ran out of candidates");
            exhausted = true;
            break;
        };
        let feedback = game.guess_word(guess.clone())?;
        steps.push(SolveStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: game.remaining_candidates().len(),
        });
    }

    Ok(SolveResult {
        secret: game.secret().clone(),
        player: spec.to_string(),
        steps,
        won: game.state() == GameState::Won,
        exhausted,
    })
}

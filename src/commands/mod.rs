//! Command implementations

pub mod analyze;
pub mod compare;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use compare::{ComparisonRow, compare_players};
pub use simple::{SimpleSummary, run_simple};
pub use solve::{SolveResult, SolveStep, solve_word};

use crate::core::WordError;
use crate::experiment::ExperimentError;
use crate::game::GameError;
use crate::player::PlayerError;
use thiserror::Error;

/// Errors from running a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Experiment(#[from] ExperimentError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Experiments: many games, one statistic
//!
//! [`Experiment`] plays a player against every word of a corpus. The
//! [`search`] module uses it to rank opening word sequences.

mod harness;
pub mod search;

pub use harness::{Experiment, ExperimentError, ExperimentStats, GameRecord};

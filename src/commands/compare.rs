//! Player comparison command
//!
//! Runs several player configurations over the same corpus.

use crate::experiment::{Experiment, ExperimentError, ExperimentStats};
use crate::player::PlayerSpec;

/// One player configuration and how it did
pub struct ComparisonRow {
    pub spec: PlayerSpec,
    pub stats: ExperimentStats,
}

/// Run `experiment` once per player configuration, in the given order
///
/// # Errors
///
/// Returns the first `ExperimentError`, for example an opening word the
/// game rejects.
pub fn compare_players(
    experiment: &Experiment<'_>,
    specs: &[PlayerSpec],
    seed: u64,
) -> Result<Vec<ComparisonRow>, ExperimentError> {
    specs
        .iter()
        .map(|spec| {
            log::info!("running {spec}");
            let stats = experiment.run_spec(spec, seed)?;
            Ok(ComparisonRow {
                spec: spec.clone(),
                stats,
            })
        })
        .collect()
}

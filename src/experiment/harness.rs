//! Experiment harness
//!
//! Plays one game per corpus word (as the secret) and tabulates the results.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameError, GameOutcome};
use crate::player::{Player, PlayerError, PlayerSpec};
use crate::wordlists::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors that abort an experiment
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error("game against {secret:?} failed")]
    Game {
        secret: String,
        #[source]
        source: GameError,
    },
}

/// Result of one game in an experiment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Word,
    pub won: bool,
    pub guesses: usize,
    pub exhausted: bool,
}

impl From<GameOutcome> for GameRecord {
    fn from(outcome: GameOutcome) -> Self {
        Self {
            secret: outcome.secret,
            won: outcome.won,
            guesses: outcome.guesses,
            exhausted: outcome.exhausted,
        }
    }
}

/// Aggregated results of an experiment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentStats {
    pub total_games: usize,
    pub success_count: usize,
    /// Guesses summed over won games only
    pub sum_of_guesses: usize,
    /// Won games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets that were not found, in corpus order
    pub failures: Vec<Word>,
    /// Games lost because the player ran out of candidates
    pub exhausted: usize,
    pub elapsed: Duration,
}

impl ExperimentStats {
    /// Tabulate game records
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use wordle_arena::core::Word;
    /// use wordle_arena::experiment::{ExperimentStats, GameRecord};
    ///
    /// let record = |w: &str, won, guesses| GameRecord {
    ///     secret: Word::new(w).unwrap(),
    ///     won,
    ///     guesses,
    ///     exhausted: false,
    /// };
    /// let stats = ExperimentStats::from_records(
    ///     &[record("lunch", true, 2), record("metro", true, 4), record("daisy", false, 6)],
    ///     Duration::ZERO,
    /// );
    /// assert!((stats.success_rate() - 2.0 / 3.0).abs() < 1e-9);
    /// assert!((stats.average_guesses() - 3.0).abs() < 1e-9);
    /// assert!((stats.speed() - 2.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_records(records: &[GameRecord], elapsed: Duration) -> Self {
        let mut stats = Self {
            total_games: records.len(),
            elapsed,
            ..Self::default()
        };
        for record in records {
            if record.won {
                stats.success_count += 1;
                stats.sum_of_guesses += record.guesses;
                *stats.distribution.entry(record.guesses).or_insert(0) += 1;
            } else {
                stats.failures.push(record.secret.clone());
                if record.exhausted {
                    stats.exhausted += 1;
                }
            }
        }
        stats
    }

    /// Fraction of games won, in `[0, 1]`
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.total_games as f64
    }

    /// Mean guesses over won games (0 when nothing was won)
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.success_count == 0 {
            return 0.0;
        }
        self.sum_of_guesses as f64 / self.success_count as f64
    }

    /// Guesses over won games divided by all games played
    #[must_use]
    pub fn speed(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.sum_of_guesses as f64 / self.total_games as f64
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_games - self.success_count
    }
}

/// Runs a player against every secret of a corpus
///
/// # Examples
/// ```
/// use wordle_arena::experiment::Experiment;
/// use wordle_arena::game::GameConfig;
/// use wordle_arena::player::FixedInitialGreedy;
/// use wordle_arena::wordlists::Corpus;
///
/// let corpus = Corpus::from_strs(["lunch", "metro", "daisy"], 5).unwrap();
/// let stats = Experiment::new(&corpus, GameConfig::default())
///     .run(|_| FixedInitialGreedy::new(&corpus, Vec::new()))
///     .unwrap();
/// assert_eq!(stats.total_games, 3);
/// assert!((stats.success_rate() - 1.0).abs() < f64::EPSILON);
/// ```
pub struct Experiment<'a> {
    corpus: &'a Corpus,
    config: GameConfig,
    limit: Option<usize>,
    parallel: bool,
    progress: bool,
}

impl<'a> Experiment<'a> {
    /// Sequential experiment over the whole corpus, without a progress bar
    #[must_use]
    pub const fn new(corpus: &'a Corpus, config: GameConfig) -> Self {
        Self {
            corpus,
            config,
            limit: None,
            parallel: false,
            progress: false,
        }
    }

    /// Only play the first `limit` secrets
    #[must_use]
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Play games on the rayon thread pool
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Show a progress bar on stderr
    #[must_use]
    pub const fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Secrets this experiment plays, in corpus order
    #[must_use]
    pub fn secrets(&self) -> &'a [Word] {
        let words = self.corpus.words();
        &words[..self.limit.unwrap_or(words.len()).min(words.len())]
    }

    /// Play every secret with a fresh player from `factory`
    ///
    /// The factory receives the game index, so seeded players stay
    /// deterministic whether or not games run in parallel. Records come back
    /// in corpus order either way.
    ///
    /// # Errors
    /// Returns `ExperimentError` if a player cannot be built or plays an
    /// invalid guess.
    pub fn run_records<P, F>(&self, factory: F) -> Result<Vec<GameRecord>, ExperimentError>
    where
        P: Player,
        F: Fn(usize) -> Result<P, PlayerError> + Sync,
    {
        let secrets = self.secrets();
        let pb = self.progress_bar(secrets.len());

        let play_one = |(index, secret): (usize, &Word)| -> Result<GameRecord, ExperimentError> {
            let mut player = factory(index)?;
            let game_error = |source| ExperimentError::Game {
                secret: secret.text().to_string(),
                source,
            };
            let mut game = Game::new(self.config, self.corpus, secret.clone()).map_err(game_error)?;
            let outcome = game.play(&mut player).map_err(game_error)?;
            pb.inc(1);
            Ok(outcome.into())
        };

        let records = if self.parallel {
            secrets
                .par_iter()
                .enumerate()
                .map(&play_one)
                .collect::<Result<Vec<_>, _>>()
        } else {
            secrets
                .iter()
                .enumerate()
                .map(&play_one)
                .collect::<Result<Vec<_>, _>>()
        };

        pb.finish_and_clear();
        records
    }

    /// Play every secret and tabulate the results
    ///
    /// # Errors
    /// See [`Experiment::run_records`].
    pub fn run<P, F>(&self, factory: F) -> Result<ExperimentStats, ExperimentError>
    where
        P: Player,
        F: Fn(usize) -> Result<P, PlayerError> + Sync,
    {
        log::info!(
            "playing {} games ({} letters, {} guesses, {})",
            self.secrets().len(),
            self.config.length,
            self.config.max_guesses,
            if self.parallel { "parallel" } else { "sequential" }
        );

        let start = Instant::now();
        let records = self.run_records(factory)?;
        let stats = ExperimentStats::from_records(&records, start.elapsed());

        log::info!(
            "success {:.3}, speed {:.3}, {} failures in {:.2}s",
            stats.success_rate(),
            stats.speed(),
            stats.failed(),
            stats.elapsed.as_secs_f64()
        );
        Ok(stats)
    }

    /// Run a player configuration; game `i` gets seed `seed + i`
    ///
    /// # Errors
    /// See [`Experiment::run_records`].
    pub fn run_spec(&self, spec: &PlayerSpec, seed: u64) -> Result<ExperimentStats, ExperimentError> {
        self.run(|index| spec.build(self.corpus, seed.wrapping_add(index as u64)))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}

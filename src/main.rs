//! Wordle Arena - CLI
//!
//! Play Wordle in a TUI or on the command line, watch scripted players solve
//! words, and compare players over a whole word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordle_arena::{
    commands::{analyze_word, compare_players, run_simple, solve_word},
    experiment::{Experiment, search},
    game::GameConfig,
    output::{
        print_analysis_result, print_comparison, print_experiment_stats, print_search_summary,
        print_solve_result,
    },
    player::{PlayerKind, PlayerSpec},
    wordlists::{Corpus, Language},
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Wordle game, scripted players and an experiment harness to compare them",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Language of the word list (only 'en' is embedded)
    #[arg(short = 'L', long, global = true, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Word list file, one word per line
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for secrets and random players (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Accept guesses that are not in the word list
    #[arg(long, global = true)]
    lenient: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG also works
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Let a player solve a specific secret
    Solve {
        /// The secret word
        word: String,

        /// Player kind
        #[arg(short, long, value_enum, default_value_t = PlayerKind::Greedy)]
        player: PlayerKind,

        /// Opening words, comma separated
        #[arg(short, long, default_value = "")]
        initial: String,

        /// Show candidate counts per turn
        #[arg(short = 'V', long)]
        detailed: bool,
    },

    /// Play one player against every word of the list
    Experiment {
        /// Player kind
        #[arg(short, long, value_enum, default_value_t = PlayerKind::Greedy)]
        player: PlayerKind,

        /// Opening words, comma separated
        #[arg(short, long, default_value = "")]
        initial: String,

        /// Only play the first N secrets
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Run games in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Compare the built-in line-up of players
    Compare {
        /// Only play the first N secrets
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Run games in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Search letter-disjoint opening sequences and write TSV
    Search {
        /// Words per opening sequence
        #[arg(short, default_value_t = 2)]
        k: usize,

        /// Evaluate only the N best-scoring sequences
        #[arg(short = 'n', long, default_value_t = 30)]
        top: usize,

        /// Only play the first N secrets per sequence
        #[arg(long)]
        limit: Option<usize>,

        /// TSV output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run games in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Letter-frequency analysis of a word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of best words to list
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = GameConfig::new(cli.length, cli.max_guesses)?;
    if cli.lenient {
        config = config.lenient();
    }
    let corpus = Corpus::load(cli.language, cli.wordlist.as_deref(), cli.length)
        .context("failed to load the word list")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, config, seed),
        Commands::Simple => {
            let summary = run_simple(&corpus, config, seed, io::stdin().lock(), io::stdout())?;
            println!("\nPlayed {}, won {}.", summary.played, summary.won);
            Ok(())
        }
        Commands::Solve {
            word,
            player,
            initial,
            detailed,
        } => {
            let spec = PlayerSpec::parse(player, &initial)?;
            let result = solve_word(&corpus, config, &spec, seed, &word)
                .with_context(|| format!("cannot solve {word:?}"))?;
            print_solve_result(&result, detailed);
            Ok(())
        }
        Commands::Experiment {
            player,
            initial,
            limit,
            parallel,
        } => {
            let spec = PlayerSpec::parse(player, &initial)?;
            let stats = Experiment::new(&corpus, config)
                .limit(limit)
                .parallel(parallel)
                .progress(true)
                .run_spec(&spec, seed)?;
            print_experiment_stats(&format!("Experiment: {spec}"), &stats);
            Ok(())
        }
        Commands::Compare { limit, parallel } => {
            let experiment = Experiment::new(&corpus, config)
                .limit(limit)
                .parallel(parallel)
                .progress(true);
            let rows = compare_players(&experiment, &PlayerSpec::defaults(), seed)?;
            print_comparison(&rows);
            Ok(())
        }
        Commands::Search {
            k,
            top,
            limit,
            output,
            parallel,
        } => run_search_command(&corpus, config, k, top, limit, output, parallel),
        Commands::Analyze { word, top } => {
            let result = analyze_word(&corpus, &word, top)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(corpus: &Corpus, config: GameConfig, seed: u64) -> Result<()> {
    use wordle_arena::interactive::{App, run_tui};

    let app = App::new(corpus, config, seed)?;
    run_tui(app)
}

fn run_search_command(
    corpus: &Corpus,
    config: GameConfig,
    k: usize,
    top: usize,
    limit: Option<usize>,
    output: Option<PathBuf>,
    parallel: bool,
) -> Result<()> {
    let openings = search::top_openings(corpus, k, Some(top));
    if openings.is_empty() {
        anyhow::bail!("no {k}-word sequences of letter-disjoint words in this word list");
    }
    log::info!("evaluating {} opening sequences", openings.len());

    let experiment = Experiment::new(corpus, config)
        .limit(limit)
        .parallel(parallel)
        .progress(output.is_some());
    let rows = search::evaluate_openings(&experiment, &openings)?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            search::write_tsv(BufWriter::new(file), k, &rows)?;
            print_search_summary(&rows, 10);
            println!("\nWrote {} rows to {}", rows.len(), path.display());
        }
        None => search::write_tsv(io::stdout().lock(), k, &rows)?,
    }
    Ok(())
}

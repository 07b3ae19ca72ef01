//! Wordle Arena
//!
//! A Wordle game, scripted players that guess under Wordle's feedback rules,
//! and an experiment harness that measures how well each player does.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arena::core::{Feedback, Word};
//! use wordle_arena::game::{Game, GameConfig};
//! use wordle_arena::player::FixedInitialGreedy;
//! use wordle_arena::wordlists::Corpus;
//!
//! // Feedback for one guess
//! let secret = Word::new("daisy").unwrap();
//! let guess = Word::new("sassy").unwrap();
//! assert_eq!(Feedback::evaluate(&secret, &guess).to_string(), "-G-GG");
//!
//! // A scripted player solving a game
//! let corpus = Corpus::english(5).unwrap();
//! let openings = vec![Word::new("lunch").unwrap(), Word::new("metro").unwrap()];
//! let mut player = FixedInitialGreedy::new(&corpus, openings).unwrap();
//! let config = GameConfig::new(5, corpus.len()).unwrap();
//! let mut game = Game::new(config, &corpus, secret).unwrap();
//! assert!(game.play(&mut player).unwrap().won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game loop
pub mod game;

// Scripted players
pub mod player;

// Experiment harness and opening search
pub mod experiment;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

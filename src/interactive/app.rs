//! TUI application state and logic

use crate::core::Feedback;
use crate::game::{Game, GameConfig, GameError, GameState};
use crate::player::EntropyRanked;
use crate::wordlists::Corpus;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub config: GameConfig,
    pub game: Game<'a>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_hint: bool,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64
    }
}

impl<'a> App<'a> {
    /// New app with a first game against a secret drawn from `seed`
    ///
    /// # Errors
    /// Returns `GameError` if the configuration does not fit the corpus.
    pub fn new(corpus: &'a Corpus, config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = Game::random(config, corpus, &mut rng)?;
        log::debug!("new game against {}", game.secret());

        Ok(Self {
            corpus,
            config,
            game,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. TAB toggles hints.",
                    config.length, config.max_guesses
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; config.max_guesses + 1],
                ..Statistics::default()
            },
            show_hint: false,
            should_quit: false,
            rng,
        })
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_alphabetic()
            && self.input_buffer.chars().count() < self.config.length
        {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Play the typed word; invalid words leave the board unchanged
    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        let input = std::mem::take(&mut self.input_buffer);
        match self.game.guess(&input) {
            Ok(feedback) => self.after_guess(&feedback),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_buffer = input;
            }
        }
    }

    fn after_guess(&mut self, feedback: &Feedback) {
        match self.game.state() {
            GameState::Won => {
                let guesses = self.game.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                let celebration = match guesses {
                    1 => "Hole in one!".to_string(),
                    2 => "Magnificent, two guesses!".to_string(),
                    n => format!("Solved in {n} guesses."),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            GameState::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("Out of guesses. The word was {}.", self.game.secret().text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            GameState::AwaitingGuess => {
                self.add_message(
                    &format!("{} ({} left)", feedback.to_emoji(), self.game.guesses_left()),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Start over with a fresh secret
    pub fn new_game(&mut self) {
        match Game::random(self.config, self.corpus, &mut self.rng) {
            Ok(game) => {
                log::debug!("new game against {}", game.secret());
                self.game = game;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Number of corpus words still consistent with the board
    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.remaining_candidates().len()
    }

    /// Best-scoring consistent word, if any
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        let candidates = self.game.remaining_candidates();
        EntropyRanked::select_best(self.corpus, &candidates).map(|(word, _)| word.text().to_string())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint = !self.show_hint,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => self.pop_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_strs(["lunch", "metro", "daisy", "dairy", "noisy"], 5).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn typing_the_secret_wins() {
        let corpus = corpus();
        let mut app = App::new(&corpus, GameConfig::default(), 1).unwrap();
        let secret = app.game.secret().text().to_string();
        type_word(&mut app, &secret);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn unknown_word_keeps_board_and_input() {
        let corpus = corpus();
        let mut app = App::new(&corpus, GameConfig::default(), 1).unwrap();
        type_word(&mut app, "zebra");

        assert!(app.game.history().is_empty());
        assert_eq!(app.input_buffer, "zebra");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn input_limited_to_word_length() {
        let corpus = corpus();
        let mut app = App::new(&corpus, GameConfig::default(), 1).unwrap();
        for c in "lunches".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "lunch");
        app.pop_letter();
        assert_eq!(app.input_buffer, "lunc");
    }

    #[test]
    fn losing_reveals_secret_and_new_game_resets() {
        let corpus = corpus();
        let config = GameConfig::new(5, 1).unwrap();
        let mut app = App::new(&corpus, config, 3).unwrap();
        let wrong = corpus
            .iter()
            .find(|w| *w != app.game.secret())
            .unwrap()
            .text()
            .to_string();
        type_word(&mut app, &wrong);

        assert_eq!(app.input_mode, InputMode::GameOver);
        let secret = app.game.secret().text().to_uppercase();
        assert!(app.messages.iter().any(|m| m.text.contains(&secret)));

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn hint_is_a_remaining_candidate() {
        let corpus = corpus();
        let app = App::new(&corpus, GameConfig::default(), 5).unwrap();
        let hint = app.hint().unwrap();
        assert!(corpus.contains_text(&hint));
        assert_eq!(app.candidates_count(), corpus.len());
    }

    #[test]
    fn tab_toggles_hint_and_ctrl_c_quits() {
        let corpus = corpus();
        let mut app = App::new(&corpus, GameConfig::default(), 5).unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert!(app.show_hint);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}

//! Simple interactive CLI mode
//!
//! Line-based game for a human player: type guesses, read colored tiles.

use super::CommandError;
use crate::game::{Game, GameConfig, GameState};
use crate::output::formatters::feedback_tiles;
use crate::player::EntropyRanked;
use crate::wordlists::Corpus;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Games played in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleSummary {
    pub played: usize,
    pub won: usize,
}

enum Turn {
    Quit,
    Finished,
}

/// Run the simple interactive CLI mode
///
/// Invalid guesses are reported and asked again. `?` suggests a word,
/// `:q` (or end of input) stops.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or the
/// configuration does not fit the corpus.
pub fn run_simple<R: BufRead, W: Write>(
    corpus: &Corpus,
    config: GameConfig,
    seed: u64,
    mut input: R,
    mut out: W,
) -> Result<SimpleSummary, CommandError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = SimpleSummary::default();

    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type '?' for a hint, ':q' to quit.",
        config.length, config.max_guesses
    )?;

    loop {
        let mut game = Game::random(config, corpus, &mut rng)?;
        log::debug!("new game against {}", game.secret());

        if let Turn::Quit = play_game(&mut game, &mut input, &mut out)? {
            return Ok(summary);
        }
        summary.played += 1;
        if game.state() == GameState::Won {
            summary.won += 1;
        }

        match read_line(&mut input, &mut out, "Play again? (y/n)")? {
            Some(answer) if matches!(answer.as_str(), "y" | "yes") => {}
            _ => return Ok(summary),
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Turn, CommandError> {
    while game.state() == GameState::AwaitingGuess {
        let prompt = format!("Guess {}/{}", game.history().len() + 1, game.config().max_guesses);
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(Turn::Quit);
        };

        match line.as_str() {
            ":q" | ":quit" => return Ok(Turn::Quit),
            "?" => {
                let candidates = game.remaining_candidates();
                let suggestion = EntropyRanked::select_best(game.corpus(), &candidates)
                    .map_or_else(|| "-".to_string(), |(w, _)| w.text().to_uppercase());
                writeln!(out, "  {} words remain, try {suggestion}", candidates.len())?;
            }
            guess => match game.guess(guess) {
                Ok(feedback) => {
                    let turn = game.history().last().map(|t| &t.guess);
                    if let Some(word) = turn {
                        writeln!(out, "  {}  {}", feedback_tiles(word, &feedback), feedback.to_emoji())?;
                    }
                }
                Err(err) => writeln!(out, "  {}", err.to_string().red())?,
            },
        }
    }

    match game.state() {
        GameState::Won => {
            let guesses = game.history().len();
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{}",
                format!("You won in {guesses} {noun}!").green().bold()
            )?;
        }
        _ => writeln!(
            out,
            "You lost. The word was {}.",
            game.secret().text().to_uppercase().on_red()
        )?,
    }
    Ok(Turn::Finished)
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    write!(out, "{prompt}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(corpus: &Corpus, config: GameConfig, script: &str) -> (SimpleSummary, String) {
        let mut out = Vec::new();
        let summary = run_simple(corpus, config, 0, script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_guesses_reprompt_then_win() {
        let corpus = Corpus::from_strs(["daisy"], 5).unwrap();
        let (summary, out) = run(&corpus, GameConfig::default(), "zebra\ncat\ndaisy\nn\n");

        assert_eq!(summary, SimpleSummary { played: 1, won: 1 });
        assert!(out.contains("\"zebra\" is not in the word list"));
        assert!(out.contains("guess must be 5 letters, got 3"));
        assert!(out.contains("You won in 1 guess!"));
    }

    #[test]
    fn win_after_several_guesses_is_plural() {
        let corpus = Corpus::from_strs(["daisy"], 5).unwrap();
        let config = GameConfig::default().lenient();
        let (summary, out) = run(&corpus, config, "zebra\ndaisy\nn\n");

        assert_eq!(summary, SimpleSummary { played: 1, won: 1 });
        assert!(out.contains("You won in 2 guesses!"));
    }

    #[test]
    fn loss_reveals_secret() {
        let corpus = Corpus::from_strs(["daisy"], 5).unwrap();
        let config = GameConfig::new(5, 1).unwrap().lenient();
        let (summary, out) = run(&corpus, config, "zebra\nn\n");

        assert_eq!(summary, SimpleSummary { played: 1, won: 0 });
        assert!(out.contains("You lost. The word was"));
        assert!(out.contains("DAISY"));
    }

    #[test]
    fn hint_and_quit() {
        let corpus = Corpus::from_strs(["daisy", "lunch"], 5).unwrap();
        let (summary, out) = run(&corpus, GameConfig::default(), "?\n:q\n");

        assert_eq!(summary, SimpleSummary::default());
        assert!(out.contains("2 words remain"));
    }

    #[test]
    fn end_of_input_stops() {
        let corpus = Corpus::from_strs(["daisy"], 5).unwrap();
        let (summary, _) = run(&corpus, GameConfig::default(), "");
        assert_eq!(summary.played, 0);
    }
}

//! TUI rendering with ratatui
//!
//! Board of colored tiles, keyboard state, hints and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ARENA")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.config.length;
    let mut lines: Vec<Line> = Vec::new();

    for turn in app.game.history().turns() {
        let spans: Vec<Span> = turn
            .guess
            .letters()
            .iter()
            .zip(turn.feedback.marks())
            .flat_map(|(&c, &mark)| [tile(c, mark_color(mark)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..length)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('_');
                [
                    Span::styled(
                        format!(" {} ", letter.to_uppercase()),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for _ in 0..app.game.guesses_left().saturating_sub(1) {
        lines.push(Line::from(
            Span::styled(" · ".repeat(length), Style::default().fg(Color::DarkGray)),
        ));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let keyboard_height = if extra_letters(app).is_empty() { 5 } else { 6 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(3),      // Candidates gauge
            Constraint::Percentage(40), // Hint
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_hint(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

/// Best mark seen for a letter across the board
fn letter_mark(app: &App, letter: char) -> Option<Mark> {
    let mut best: Option<Mark> = None;
    for turn in app.game.history().turns() {
        for (&c, &mark) in turn.guess.letters().iter().zip(turn.feedback.marks()) {
            if c != letter {
                continue;
            }
            best = match (best, mark) {
                (Some(Mark::Correct), _) | (_, Mark::Correct) => Some(Mark::Correct),
                (Some(Mark::Present), _) | (_, Mark::Present) => Some(Mark::Present),
                _ => Some(Mark::Absent),
            };
        }
    }
    best
}

/// Corpus letters missing from the QWERTY rows (umlauts, ß, ...), sorted
fn extra_letters(app: &App) -> Vec<char> {
    let mut extra: Vec<char> = app
        .corpus
        .frequencies()
        .ranked()
        .into_iter()
        .map(|(c, _)| c)
        .filter(|c| !KEYBOARD_ROWS.iter().any(|row| row.contains(*c)))
        .collect();
    extra.sort_unstable();
    extra
}

fn key_span(app: &App, c: char) -> Span<'static> {
    let style = match letter_mark(app, c) {
        Some(mark) => Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    };
    // ß has no single-letter uppercase form
    let label: String = if c.to_uppercase().count() == 1 {
        c.to_uppercase().collect()
    } else {
        c.to_string()
    };
    Span::styled(format!("{label} "), style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| Line::from(row.chars().map(|c| key_span(app, c)).collect::<Vec<_>>()))
        .collect();

    let extra = extra_letters(app);
    if !extra.is_empty() {
        lines.push(Line::from(extra.into_iter().map(|c| key_span(app, c)).collect::<Vec<_>>()));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let total = app.corpus.len();
    let remaining = app.candidates_count();
    let eliminated_pct = if total == 0 {
        0
    } else {
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Eliminated ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining} of {total} words remain"));
    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if !app.show_hint {
        vec![Line::from(Span::styled(
            "Press TAB to show a hint",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if app.input_mode == InputMode::GameOver {
        vec![Line::from("Game over")]
    } else {
        let candidates: Vec<&Word> = app.game.remaining_candidates();
        let mut lines = vec![Line::from(vec![
            Span::raw("Try: "),
            Span::styled(
                app.hint().unwrap_or_default().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        if candidates.len() <= 8 {
            lines.extend(
                candidates
                    .iter()
                    .map(|w| Line::from(format!("  • {}", w.text().to_uppercase()))),
            );
        }
        lines
    };

    let hint = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(hint, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Guess {} of {} | Enter to submit ",
                app.game.history().len() + 1,
                app.config.max_guesses
            ),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Games: {} | Win rate: {:.0}% | Esc: quit | TAB: hint",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::Corpus;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_without_panicking() {
        let corpus = Corpus::from_strs(["lunch", "metro", "daisy"], 5).unwrap();
        let mut app = App::new(&corpus, GameConfig::default(), 2).unwrap();
        for c in "lunch".chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        app.show_hint = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }

    #[test]
    fn letter_mark_prefers_best() {
        let corpus = Corpus::from_strs(["lunch", "metro", "daisy"], 5).unwrap();
        let mut app = App::new(&corpus, GameConfig::default().lenient(), 2).unwrap();
        let secret = app.game.secret().clone();
        for c in secret.text().chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        assert_eq!(letter_mark(&app, secret.letter_at(0)), Some(Mark::Correct));
        assert_eq!(letter_mark(&app, 'z'), None);
    }

    #[test]
    fn extra_row_holds_letters_outside_qwerty() {
        let corpus = Corpus::from_strs(["rüböl", "straß", "lunch"], 5).unwrap();
        let app = App::new(&corpus, GameConfig::default(), 0).unwrap();
        assert_eq!(extra_letters(&app), vec!['ß', 'ö', 'ü']);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains('Ü'));
        assert!(screen.contains('Ö'));
    }

    #[test]
    fn ascii_corpus_has_no_extra_row() {
        let corpus = Corpus::from_strs(["lunch", "metro", "daisy"], 5).unwrap();
        let app = App::new(&corpus, GameConfig::default(), 0).unwrap();
        assert!(extra_letters(&app).is_empty());
    }
}

//! TUI rendering with ratatui
//!
//! Board, entry boxes and statistics for the daily puzzle.

use super::app::{App, Entry, InputMode, MessageStyle};
use crate::core::{Code, FeedbackColor, Field, GuessResult, Month};
use crate::game::{MAX_GUESSES, Outcome};
use crate::output::formatters::MONTH_COLUMN;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🥛 CURDLE {} - What's my milkfat, and when do I expire?",
        app.session.date()
    ))
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

const fn cell_style(color: FeedbackColor) -> Style {
    let (fg, bg) = match color {
        FeedbackColor::Green => (Color::Black, Color::Green),
        FeedbackColor::Yellow => (Color::Black, Color::Yellow),
        FeedbackColor::Black => (Color::White, Color::DarkGray),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn digit_spans(digits: &str, feedback: &[FeedbackColor]) -> Vec<Span<'static>> {
    digits
        .chars()
        .zip(feedback)
        .map(|(digit, &color)| Span::styled(format!(" {digit} "), cell_style(color)))
        .collect()
}

/// A scored guess as one line of coloured cells
fn guess_line(guess: &Code, result: &GuessResult) -> Line<'static> {
    let mut spans = digit_spans(&guess.milkfat_digits(), &result.milkfat);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!(" {:<width$} ", guess.month().name(), width = MONTH_COLUMN),
        cell_style(result.month),
    ));
    spans.push(Span::raw("  "));
    spans.extend(digit_spans(&guess.day_digits(), &result.day));
    spans.push(Span::raw("  "));
    spans.extend(digit_spans(&guess.year_digits(), &result.year));
    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    let blank = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled(" · ".repeat(3), blank),
        Span::raw("  "),
        Span::styled(format!(" {:<width$} ", "·", width = MONTH_COLUMN), blank),
        Span::raw("  "),
        Span::styled(" · ".repeat(2), blank),
        Span::raw("  "),
        Span::styled(" · ".repeat(4), blank),
    ])
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2 + 2);

    for (guess, result) in app.session.history() {
        lines.push(guess_line(guess, result));
        lines.push(Line::from(""));
    }
    for _ in app.session.guesses().len()..MAX_GUESSES {
        lines.push(empty_line());
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::GameOver {
        let (label, color) = match app.session.outcome() {
            Outcome::Won(_) => ("Answer:", Color::Green),
            Outcome::Lost | Outcome::InProgress => ("The answer was:", Color::Red),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(guess_line(&app.secret, &GuessResult::PERFECT));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Length(9), // Guess distribution
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let percent = app.stats.win_rate().round().clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{percent}% of {} played | streak {}",
            app.stats.played, app.stats.current_streak
        ));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let max = app.stats.guess_distribution.iter().copied().max().unwrap_or(0);
    let bar_width = usize::from(area.width.saturating_sub(12));
    let today = match app.session.outcome() {
        Outcome::Won(n) => Some(n),
        _ => None,
    };

    let lines: Vec<Line> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let len = if max == 0 || count == 0 {
                0
            } else {
                (count as usize * bar_width).div_ceil(max as usize).max(1)
            };
            let color = if today == Some(i + 1) {
                Color::Green
            } else {
                Color::DarkGray
            };
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled("█".repeat(len), Style::default().fg(color)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, area);
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

/// The entry boxes, with the focused field highlighted
fn entry_line(entry: &Entry) -> Line<'static> {
    let focused = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let idle = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    for field in Field::ALL {
        let style = if entry.focus() == field { focused } else { idle };

        let text = match field.width() {
            Some(width) => {
                let digits = entry.digits(field);
                digits
                    .chars()
                    .chain(std::iter::repeat('_'))
                    .take(width)
                    .map(|c| format!("[{c}]"))
                    .collect()
            }
            None => {
                let month = entry.month.map_or("?", Month::name);
                format!("[{month:^width$}]", width = MONTH_COLUMN)
            }
        };

        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }

    if entry.is_complete() {
        spans.push(Span::styled("⏎ submit", Style::default().fg(Color::Green)));
    }

    Line::from(spans)
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = if app.session.is_won() {
                " 🎉 SOLVED! 🎉 | Press 's' to share or 'q' to quit "
            } else {
                " 🧀 GAME OVER | Press 's' to share or 'q' to quit "
            };
            (title, Line::from(""), Color::Green)
        }
        InputMode::Entry => (
            " Milkfat | Month (↑/↓ or letters) | Day | Year  -  Tab to move, Enter to submit ",
            entry_line(&app.entry),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let guesses_text = format!("Guess: {}/{MAX_GUESSES}", app.session.guesses().len());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats_text = format!(
        "Played: {} | Won: {}",
        app.stats.played, app.stats.won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | s: Share",
        InputMode::Entry => "Esc: Quit | Backspace: Delete | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

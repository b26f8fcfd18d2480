//! TUI application state and logic

use crate::core::{Code, Field, Month, SecretCode};
use crate::game::{GameSession, MAX_GUESSES, Outcome, Statistics};
use crate::storage::{SessionStore, persist};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub secret: SecretCode,
    pub session: GameSession,
    store: &'a mut dyn SessionStore,
    pub stats: Statistics,
    pub entry: Entry,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    GameOver,
}

/// The guess being typed, one buffer per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub milkfat: String,
    pub month: Option<Month>,
    pub day: String,
    pub year: String,
    focus: Field,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            milkfat: String::new(),
            month: None,
            day: String::new(),
            year: String::new(),
            focus: Field::Milkfat,
        }
    }
}

impl Entry {
    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    fn digits_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Milkfat => Some(&mut self.milkfat),
            Field::Day => Some(&mut self.day),
            Field::Year => Some(&mut self.year),
            Field::Month => None,
        }
    }

    /// Digits typed so far for a numeric field
    #[must_use]
    pub fn digits(&self, field: Field) -> &str {
        match field {
            Field::Milkfat => &self.milkfat,
            Field::Day => &self.day,
            Field::Year => &self.year,
            Field::Month => "",
        }
    }

    /// Every digit box filled and a month chosen
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.month.is_some()
            && Field::ALL.iter().all(|&field| {
                field
                    .width()
                    .is_none_or(|width| self.digits(field).len() == width)
            })
    }

    fn move_focus(&mut self, step: isize) {
        let index = Field::ALL.iter().position(|&f| f == self.focus()).unwrap_or(0);
        let next = (index as isize + step).rem_euclid(Field::ALL.len() as isize);
        self.focus = Field::ALL[next as usize];
    }

    /// Type a digit into the focused field, advancing when it fills up
    fn push_digit(&mut self, digit: char) {
        let field = self.focus();
        let Some(width) = field.width() else {
            return;
        };

        let full = self.digits_mut(field).is_some_and(|buffer| {
            if buffer.len() < width {
                buffer.push(digit);
            }
            buffer.len() == width
        });

        if full {
            self.move_focus(1);
        }
    }

    /// Delete the last digit, stepping back a field when already empty
    fn backspace(&mut self) {
        let field = self.focus();
        let emptied = match self.digits_mut(field) {
            Some(buffer) => buffer.pop().is_none(),
            None => self.month.take().is_none(),
        };

        if emptied && field != Field::Milkfat {
            self.move_focus(-1);
        }
    }

    fn cycle_month(&mut self, step: isize) {
        self.month = Some(match self.month {
            None if step >= 0 => Month::January,
            None => Month::December,
            Some(month) if step >= 0 => month.succ(),
            Some(month) => month.pred(),
        });
    }

    fn to_guess(&self) -> Result<Code, crate::core::CodeError> {
        let month = self.month.map(Month::name).unwrap_or_default();
        Code::from_fields(&self.milkfat, month, &self.day, &self.year)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    pub fn new(secret: SecretCode, session: GameSession, store: &'a mut dyn SessionStore) -> Self {
        let stats = store.load_stats().unwrap_or_else(|e| {
            log::warn!("could not load statistics: {e}");
            Statistics::default()
        });
        let input_mode = if session.is_over() {
            InputMode::GameOver
        } else {
            InputMode::Entry
        };

        let mut app = Self {
            secret,
            session,
            store,
            stats,
            entry: Entry::default(),
            messages: Vec::new(),
            input_mode,
            should_quit: false,
        };

        if app.session.is_over() {
            app.add_message("You've already finished today's puzzle.", MessageStyle::Info);
            app.announce_outcome();
        } else {
            app.add_message(
                "Type digits, ↑/↓ picks the month, Tab moves between fields.",
                MessageStyle::Info,
            );
            app.add_message("Enter submits once every box is filled.", MessageStyle::Info);
        }

        app
    }

    /// Handle a key press; returns without effect for key releases
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s') => {
                    let share = self.session.share_text();
                    for line in share.lines().filter(|l| !l.is_empty()) {
                        self.add_message(line, MessageStyle::Info);
                    }
                }
                _ => {
                    // Board is final, ignore other keys
                }
            },
            InputMode::Entry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.entry.focus() == Field::Month {
                        self.entry.move_focus(1);
                    }
                    self.entry.push_digit(c);
                }
                KeyCode::Char(c) if self.entry.focus() == Field::Month && c.is_ascii_alphabetic() => {
                    self.jump_to_month(c);
                }
                KeyCode::Up => self.entry.cycle_month(-1),
                KeyCode::Down => self.entry.cycle_month(1),
                KeyCode::Tab | KeyCode::Right => self.entry.move_focus(1),
                KeyCode::BackTab | KeyCode::Left => self.entry.move_focus(-1),
                KeyCode::Backspace => self.entry.backspace(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    /// Pick the next month starting with `letter` after the current one
    fn jump_to_month(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let start = self.entry.month.map_or(0, |m| m.index() + 1);

        if let Some(month) = (0..12)
            .map(|offset| Month::ALL[(start + offset) % 12])
            .find(|m| m.name().starts_with(letter))
        {
            self.entry.month = Some(month);
        }
    }

    /// Score the typed guess and save progress
    pub fn submit(&mut self) {
        if !self.entry.is_complete() {
            self.add_message("Fill every box and pick a month first!", MessageStyle::Error);
            return;
        }

        let guess = match self.entry.to_guess() {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };

        let result = match self.session.submit(&self.secret, guess) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.entry = Entry::default();

        match persist(&mut *self.store, &self.session) {
            Ok(stats) => self.stats = stats,
            Err(e) => self.add_message(&format!("Could not save progress: {e}"), MessageStyle::Error),
        }

        if self.session.is_over() {
            self.input_mode = InputMode::GameOver;
            self.announce_outcome();
        } else {
            self.add_message(
                &format!(
                    "{} green, {} yellow. {} guesses left.",
                    result.count_greens(),
                    result.count_yellows(),
                    self.session.remaining()
                ),
                MessageStyle::Info,
            );
        }
    }

    fn announce_outcome(&mut self) {
        match self.session.outcome() {
            Outcome::Won(guesses) => {
                let celebration = match guesses {
                    1 => "🥛 HOLE IN ONE! Fresh from the cow!",
                    2 => "🧀 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("🤢 Curdled! No luck in {MAX_GUESSES} guesses."),
                    MessageStyle::Error,
                );
            }
            Outcome::InProgress => return,
        }
        self.add_message("Press 's' to share or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
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
    use crate::daily::GeneratorKind;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn secret() -> Code {
        Code::new(48, Month::June, 14, 1953).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Type a full guess: milkfat digits, month letter(s), day, year
    fn enter_guess(app: &mut App, milkfat: &str, month: Month, day: &str, year: &str) {
        type_str(app, milkfat);
        assert_eq!(app.entry.focus(), Field::Month);
        app.entry.month = Some(month);
        press(app, KeyCode::Tab);
        type_str(app, day);
        type_str(app, year);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn digits_auto_advance_between_fields() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);

        type_str(&mut app, "048");
        assert_eq!(app.entry.milkfat, "048");
        assert_eq!(app.entry.focus(), Field::Month);

        // A digit on the month field skips ahead to the day
        type_str(&mut app, "14");
        assert_eq!(app.entry.day, "14");
        assert_eq!(app.entry.focus(), Field::Year);
    }

    #[test]
    fn focus_moves_only_through_keys() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);
        assert_eq!(app.entry.focus(), Field::Milkfat);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.entry.focus(), Field::Year);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.entry.focus(), Field::Milkfat);

        // Submitting resets the entry back to the first field
        enter_guess(&mut app, "084", Month::July, "14", "1935");
        assert_eq!(app.entry, Entry::default());
        assert_eq!(app.entry.focus(), Field::Milkfat);
    }

    #[test]
    fn backspace_steps_back_when_empty() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);

        type_str(&mut app, "04");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.entry.milkfat, "0");

        app.entry.focus = Field::Day;
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.entry.focus(), Field::Month);
    }

    #[test]
    fn month_selection_keys() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);
        app.entry.focus = Field::Month;

        press(&mut app, KeyCode::Down);
        assert_eq!(app.entry.month, Some(Month::January));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.entry.month, Some(Month::December));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.month, Some(Month::January));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.month, Some(Month::June));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.month, Some(Month::July));
    }

    #[test]
    fn incomplete_entry_is_not_submitted() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);

        type_str(&mut app, "48");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.guesses().is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn winning_guess_ends_game_and_saves() {
        let mut store = MemoryStore::default();
        {
            let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);

            enter_guess(&mut app, "084", Month::July, "41", "1935");
            // Day 41 is rejected by validation, nothing recorded
            assert!(app.session.guesses().is_empty());

            app.entry = Entry::default();
            enter_guess(&mut app, "084", Month::July, "14", "1935");
            assert_eq!(app.session.guesses().len(), 1);
            assert_eq!(app.input_mode, InputMode::Entry);

            enter_guess(&mut app, "048", Month::June, "14", "1953");
            assert_eq!(app.input_mode, InputMode::GameOver);
            assert_eq!(app.stats.won, 1);

            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit);
        }

        let saved = store.load(date(), GeneratorKind::Legacy).unwrap().unwrap();
        assert_eq!(saved.outcome(), Outcome::Won(2));
    }

    #[test]
    fn finished_session_opens_in_game_over() {
        let mut session = GameSession::new(date(), GeneratorKind::Legacy);
        session.submit(&secret(), secret()).unwrap();

        let mut store = MemoryStore::default();
        let app = App::new(secret(), session, &mut store);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut store = MemoryStore::default();
        let mut app = App::new(secret(), GameSession::new(date(), GeneratorKind::Legacy), &mut store);

        let mut key = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.entry.milkfat.is_empty());
    }
}

//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is a full guess such as
//! `42 june 14 1953`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::core::{Guess, SecretCode};
use crate::game::{GameSession, MAX_GUESSES};
use crate::output::{print_board, print_game_over};
use crate::storage::{SessionStore, persist};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(Guess),
    Quit,
    Help,
    Share,
    Invalid(String),
}

/// Interpret one line of input
#[must_use]
pub fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "help" | "h" | "?" => Input::Help,
        "share" | "s" => Input::Share,
        other => match other.parse::<Guess>() {
            Ok(guess) => Input::Guess(guess),
            Err(e) => Input::Invalid(e.to_string()),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// Every guess is handed to `store`. `saves_progress` says whether that store
/// outlives the run, and only changes what the player is told on quitting.
/// Reaching end of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or saving progress.
pub fn run_simple<S: SessionStore + ?Sized>(
    secret: &SecretCode,
    mut session: GameSession,
    store: &mut S,
    saves_progress: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║        Curdle - What's my milkfat, and when do I expire?     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("Puzzle for {}", session.date().to_string().bright_yellow());
    print_help();

    print_board(&session);

    if session.is_over() {
        println!("You've already finished this puzzle.\n");
        print_game_over(&session, secret);
        println!("{}\n", session.share_text());
        return Ok(());
    }

    while !session.is_over() {
        let Some(line) = get_user_input(
            &mut lines,
            &format!("Guess {} of {MAX_GUESSES}", session.guesses().len() + 1),
        )?
        else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("\n{}\n", quit_message(saves_progress));
                return Ok(());
            }
            Input::Help => print_help(),
            Input::Share => println!("\n{}\n", session.share_text()),
            Input::Invalid(reason) => println!("❌ {reason}\n"),
            Input::Guess(guess) => {
                session.submit(secret, guess)?;
                persist(store, &session)?;
                print_board(&session);
            }
        }
    }

    if session.is_over() {
        print_game_over(&session, secret);
        println!("{}\n", session.share_text());
    }

    Ok(())
}

fn quit_message(saves_progress: bool) -> &'static str {
    if saves_progress {
        "👋 Progress saved. Come back before midnight UTC!"
    } else {
        "👋 Practice game abandoned. Nothing was saved."
    }
}

fn print_help() {
    println!("\nEnter a guess as: milkfat month day year  (e.g. '42 june 14 1953')");
    println!("  - Milkfat is 0-100, the expiration year is 1886 or later");
    println!("  - 🟩 right digit, right place   🟨 digit elsewhere   ⬛ not there");
    println!("  - The month is 🟨 when it is one month off (December/January wrap)");
    println!("Commands: 'share' for the emoji grid, 'quit' to exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(reader: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Month};

    #[test]
    fn parse_input_commands() {
        assert_eq!(parse_input("  QUIT "), Input::Quit);
        assert_eq!(parse_input("?"), Input::Help);
        assert_eq!(parse_input("share"), Input::Share);
    }

    #[test]
    fn parse_input_guess() {
        assert_eq!(
            parse_input("42 June 14 1953"),
            Input::Guess(Code::new(42, Month::June, 14, 1953).unwrap())
        );
    }

    #[test]
    fn parse_input_reports_reason() {
        match parse_input("42 june 14") {
            Input::Invalid(reason) => assert!(reason.contains("expected 4 fields")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn quit_message_matches_persistence() {
        assert!(quit_message(true).contains("Progress saved"));
        assert!(!quit_message(false).contains("saved."));
        assert!(quit_message(false).contains("Nothing was saved"));
    }

    #[test]
    fn user_input_stops_at_eof() {
        let mut reader = io::Cursor::new("12 may 1 1999\n");
        assert_eq!(
            get_user_input(&mut reader, "x").unwrap().as_deref(),
            Some("12 may 1 1999")
        );
        assert_eq!(get_user_input(&mut reader, "x").unwrap(), None);
    }
}

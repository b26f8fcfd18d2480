//! Per-day game session
//!
//! A session holds the ordered guesses and their feedback for one puzzle
//! date. The presentation layer owns it and hands it to a
//! [`SessionStore`](crate::storage::SessionStore) to persist between runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Guess, GuessResult, SecretCode, check_guess};
use crate::daily::GeneratorKind;

/// Maximum number of guesses per puzzle
pub const MAX_GUESSES: usize = 6;

/// Errors from submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game for {0} is already over")]
    GameOver(NaiveDate),
}

/// How a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Won on the given guess (1-based)
    Won(usize),
    Lost,
}

/// Guess history and terminal flag for one puzzle
///
/// A puzzle is a date plus the generator that derived its secret, so a
/// session never mixes guesses scored against different secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    date: NaiveDate,
    // Saves written before the generator was recorded were all legacy
    #[serde(default)]
    generator: GeneratorKind,
    guesses: Vec<Guess>,
    results: Vec<GuessResult>,
    game_over: bool,
}

impl GameSession {
    #[must_use]
    pub const fn new(date: NaiveDate, generator: GeneratorKind) -> Self {
        Self {
            date,
            generator,
            guesses: Vec::new(),
            results: Vec::new(),
            game_over: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Generator the session's secret comes from
    #[inline]
    #[must_use]
    pub const fn generator(&self) -> GeneratorKind {
        self.generator
    }

    /// Whether this session belongs to the puzzle for `date` under `generator`
    #[must_use]
    pub fn is_for(&self, date: NaiveDate, generator: GeneratorKind) -> bool {
        self.date == date && self.generator == generator
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Guesses paired with their feedback, oldest first
    pub fn history(&self) -> impl Iterator<Item = (&Guess, &GuessResult)> {
        self.guesses.iter().zip(self.results.iter())
    }

    /// Score `guess` against `secret` and append it to the history
    ///
    /// The game ends on a winning guess or when the sixth guess is used.
    ///
    /// # Errors
    /// Returns `SessionError::GameOver` if the game has already ended.
    pub fn submit(&mut self, secret: &SecretCode, guess: Guess) -> Result<GuessResult, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver(self.date));
        }

        let result = check_guess(secret, &guess);
        self.guesses.push(guess);
        self.results.push(result);

        if result.is_win() || self.guesses.len() >= MAX_GUESSES {
            self.game_over = true;
        }

        log::debug!(
            "session {}: guess {} -> {} (over: {})",
            self.date,
            self.guesses.len(),
            result.to_emoji(),
            self.game_over
        );

        Ok(result)
    }

    /// Check if the game has ended
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over || self.guesses.len() >= MAX_GUESSES
    }

    /// Check if the last guess was a winner
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.results.last().is_some_and(GuessResult::is_win)
    }

    /// Guesses left before the cap
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.is_over() {
            0
        } else {
            MAX_GUESSES - self.guesses.len()
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won(self.guesses.len())
        } else if self.is_over() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Check that a restored session is internally sound
    ///
    /// Guesses and results must pair up, stay within the cap, and any win must
    /// be the final entry with the terminal flag set.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.guesses.len() != self.results.len() || self.guesses.len() > MAX_GUESSES {
            return false;
        }

        let win_position = self.results.iter().position(GuessResult::is_win);
        match win_position {
            Some(i) => i + 1 == self.results.len() && self.game_over,
            None => self.game_over == (self.guesses.len() == MAX_GUESSES),
        }
    }

    /// Spoiler-free emoji grid, e.g. for pasting into chat
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.outcome() {
            Outcome::Won(n) => format!("{n}/{MAX_GUESSES}"),
            Outcome::Lost => format!("X/{MAX_GUESSES}"),
            Outcome::InProgress => format!("{}/{MAX_GUESSES} (in progress)", self.guesses.len()),
        };

        let mut text = format!("Curdle {} {score}\n", self.date);
        for result in &self.results {
            text.push('\n');
            text.push_str(&result.to_emoji());
        }
        text
    }
}

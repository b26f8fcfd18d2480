//! One-shot guess against today's saved session

use anyhow::Result;
use chrono::NaiveDate;

use crate::core::{Guess, GuessResult, SecretCode};
use crate::daily::{GeneratorKind, SecretGenerator};
use crate::game::{GameSession, Statistics};
use crate::storage::{SessionStore, load_or_new, persist};

/// Result of submitting a single guess
#[derive(Debug)]
pub struct GuessOutcome {
    pub secret: SecretCode,
    pub session: GameSession,
    pub result: GuessResult,
    pub stats: Statistics,
}

/// Load the puzzle for `date` under `generator`, submit `guess`, and save it back
///
/// The secret is derived from the same generator the session is keyed by, so
/// a saved session only ever holds guesses scored against one secret.
///
/// # Errors
///
/// Returns an error if the game for `date` is already over or the store
/// cannot be read or written.
pub fn submit_guess<S: SessionStore + ?Sized>(
    store: &mut S,
    generator: GeneratorKind,
    date: NaiveDate,
    guess: Guess,
) -> Result<GuessOutcome> {
    let secret = generator.generate(date);
    let mut session = load_or_new(store, date, generator)?;
    let result = session.submit(&secret, guess)?;
    let stats = persist(store, &session)?;

    Ok(GuessOutcome {
        secret,
        session,
        result,
        stats,
    })
}

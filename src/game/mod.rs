//! Game state around the pure core
//!
//! The session enforces the six-guess cap and terminal state; statistics
//! summarise finished sessions.

mod session;
mod stats;

pub use session::{GameSession, MAX_GUESSES, Outcome, SessionError};
pub use stats::Statistics;

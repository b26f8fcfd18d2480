//! Core domain types for Curdle
//!
//! This module contains the pure game logic: the four-field code, per-digit
//! feedback and the scorer. Nothing here performs I/O.

pub mod code;
mod feedback;
mod month;
mod scorer;

pub use code::{Code, CodeError, Field, Guess, SecretCode};
pub use feedback::{FeedbackColor, row_to_emoji};
pub use month::Month;
pub use scorer::{GuessResult, check_guess, compare_digits, compare_months, is_winning_guess};

//! Curdle
//!
//! A daily guessing game: find the milkfat percentage and expiration date of
//! the day's carton in six guesses, with Wordle-style feedback per digit.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use curdle::core::{Code, Month, check_guess, is_winning_guess};
//! use curdle::daily::generate_daily_code;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let secret = generate_daily_code(date);
//!
//! let guess = Code::new(50, Month::June, 14, 1950).unwrap();
//! let result = check_guess(&secret, &guess);
//! println!("{}", result.to_emoji());
//!
//! assert!(is_winning_guess(&check_guess(&secret, &secret)));
//! ```

// Codes, feedback and scoring
pub mod core;

// Date-seeded secret generation
pub mod daily;

// Session state and statistics
pub mod game;

// Persistence of sessions and statistics
pub mod storage;

// User configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Terminal output formatting
//!
//! Display utilities for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_audit_result, print_board, print_game_over, print_reveal, print_stats};

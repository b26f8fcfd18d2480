//! Interactive TUI for today's puzzle

pub mod app;
mod rendering;

pub use app::{App, run_tui};

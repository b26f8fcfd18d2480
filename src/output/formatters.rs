//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Code, FeedbackColor, GuessResult};

/// Width of the month column in board rows
pub const MONTH_COLUMN: usize = 9;

/// Paint `text` with the background of its feedback colour
#[must_use]
pub fn feedback_cell(text: &str, color: FeedbackColor) -> ColoredString {
    match color {
        FeedbackColor::Green => text.black().on_green().bold(),
        FeedbackColor::Yellow => text.black().on_yellow().bold(),
        FeedbackColor::Black => text.white().on_bright_black(),
    }
}

/// One cell per digit, each padded to three columns
fn digit_cells(digits: &str, feedback: &[FeedbackColor]) -> String {
    digits
        .chars()
        .zip(feedback)
        .map(|(digit, &color)| feedback_cell(&format!(" {digit} "), color).to_string())
        .collect()
}

/// A guess rendered with its feedback: milkfat, month, day, year
#[must_use]
pub fn format_guess_row(guess: &Code, result: &GuessResult) -> String {
    let month = format!(" {:<width$} ", guess.month().name(), width = MONTH_COLUMN);

    format!(
        "{}  {}  {}  {}",
        digit_cells(&guess.milkfat_digits(), &result.milkfat),
        feedback_cell(&month, result.month),
        digit_cells(&guess.day_digits(), &result.day),
        digit_cells(&guess.year_digits(), &result.year)
    )
}

/// Column headings aligned with [`format_guess_row`]
#[must_use]
pub fn board_header() -> String {
    format!(
        "{:<9}  {:<width$}  {:<6}  {:<12}",
        "Milkfat",
        "Month",
        "Day",
        "Year",
        width = MONTH_COLUMN + 2
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Per-digit feedback colours
//!
//! - Green: correct digit in the correct position
//! - Yellow: digit present elsewhere (or month off by one)
//! - Black: digit absent

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single digit or for the month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackColor {
    Green,
    Yellow,
    #[default]
    Black,
}

impl FeedbackColor {
    #[inline]
    #[must_use]
    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }

    /// Square emoji used in share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }

    /// Single-letter code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => '-',
        }
    }

    /// Parse a single feedback cell
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`B`/`b`/⬛/⬜.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'B' | 'b' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }
}

impl fmt::Display for FeedbackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        };
        f.write_str(name)
    }
}

/// Render a row of feedback as emoji squares
#[must_use]
pub fn row_to_emoji(row: &[FeedbackColor]) -> String {
    row.iter().map(|c| c.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_char_codes() {
        for color in [FeedbackColor::Green, FeedbackColor::Yellow, FeedbackColor::Black] {
            assert_eq!(FeedbackColor::from_char(color.to_char()), Some(color));
            assert_eq!(FeedbackColor::from_char(color.to_emoji()), Some(color));
        }
        assert_eq!(FeedbackColor::from_char('x'), None);
    }

    #[test]
    fn feedback_serializes_lowercase() {
        let json = serde_json::to_string(&FeedbackColor::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }

    #[test]
    fn feedback_row_emoji() {
        let row = [FeedbackColor::Green, FeedbackColor::Black, FeedbackColor::Yellow];
        assert_eq!(row_to_emoji(&row), "🟩⬛🟨");
    }
}

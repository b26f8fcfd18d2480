//! Calendar month of the expiration date
//!
//! Months are compared by index (January = 0) with a circular distance, so
//! December and January count as neighbours.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CodeError;

/// One of the twelve calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Zero-based index (January = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, or `None` if the index is 12 or more
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 12 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Month for a one-based calendar number (1 = January)
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        if matches!(number, 1..=12) {
            Some(Self::ALL[number as usize - 1])
        } else {
            None
        }
    }

    /// Full English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Three-letter abbreviation used in compact output
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    /// Raw index distance between two months (0-11)
    ///
    /// Only distances 1 and 11 are treated as "adjacent" by the scorer.
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Next month, wrapping December to January
    #[must_use]
    pub const fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }

    /// Previous month, wrapping January to December
    #[must_use]
    pub const fn pred(self) -> Self {
        Self::ALL[(self.index() + 11) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CodeError;

    /// Parse a month from its name, a prefix of at least three letters, or
    /// its calendar number (1-12).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or_else(|| CodeError::UnknownMonth(s.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.len() < 3 {
            return Err(CodeError::UnknownMonth(s.to_string()));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().to_ascii_lowercase().starts_with(&lower))
            .ok_or_else(|| CodeError::UnknownMonth(s.to_string()))
    }
}

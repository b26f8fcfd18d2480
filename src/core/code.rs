//! The four-field code shared by the daily secret and player guesses
//!
//! A code is a milkfat percentage and an expiration date. Numeric fields are
//! compared digit by digit after zero-padding to a fixed width:
//! milkfat to 3 digits, day to 2, year to 4.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Month;

/// Digit width of the milkfat field
pub const MILKFAT_DIGITS: usize = 3;
/// Digit width of the day field
pub const DAY_DIGITS: usize = 2;
/// Digit width of the year field
pub const YEAR_DIGITS: usize = 4;

/// Accepted milkfat range for guesses and secrets
pub const MILKFAT_MAX: u8 = 100;
/// Accepted day range for guesses (secrets only use 1-28)
pub const DAY_MIN: u8 = 1;
pub const DAY_MAX: u8 = 31;
/// Accepted year range for guesses (exactly four digits)
pub const YEAR_MIN: u16 = 1000;
pub const YEAR_MAX: u16 = 9999;

/// One of the four code fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Milkfat,
    Month,
    Day,
    Year,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Milkfat, Self::Month, Self::Day, Self::Year];

    /// Digit width, or `None` for the month
    #[must_use]
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Milkfat => Some(MILKFAT_DIGITS),
            Self::Day => Some(DAY_DIGITS),
            Self::Year => Some(YEAR_DIGITS),
            Self::Month => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Milkfat => "milkfat",
            Self::Month => "month",
            Self::Day => "day",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

/// Errors from building a code out of user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("{field} must contain only digits, got '{input}'")]
    NotDigits { field: Field, input: String },

    #[error("{field} has at most {width} digits, got '{input}'")]
    TooWide {
        field: Field,
        width: usize,
        input: String,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("expected 4 fields (milkfat month day year), got {0}")]
    FieldCount(usize),
}

/// A milkfat percentage plus an expiration date
///
/// Used for both the daily secret and each guess. Fields are private so a
/// code is always within the ranges checked by [`Code::new`], including
/// codes read back from a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCode")]
pub struct Code {
    milkfat: u8,
    month: Month,
    day: u8,
    year: u16,
}

/// Unchecked wire form of [`Code`]
#[derive(Deserialize)]
struct RawCode {
    milkfat: u8,
    month: Month,
    day: u8,
    year: u16,
}

impl TryFrom<RawCode> for Code {
    type Error = CodeError;

    fn try_from(raw: RawCode) -> Result<Self, Self::Error> {
        Self::new(raw.milkfat, raw.month, raw.day, raw.year)
    }
}

/// The day's hidden target
pub type SecretCode = Code;

/// A single player submission
pub type Guess = Code;

impl Code {
    /// Build a validated code
    ///
    /// # Errors
    /// Returns `CodeError::OutOfRange` if milkfat exceeds 100, the day is not
    /// 1-31, or the year is not a four-digit number.
    ///
    /// # Examples
    /// ```
    /// use curdle::core::{Code, Month};
    ///
    /// let code = Code::new(2, Month::March, 14, 2031).unwrap();
    /// assert_eq!(code.milkfat_digits(), "002");
    /// assert!(Code::new(101, Month::March, 14, 2031).is_err());
    /// ```
    pub fn new(milkfat: u8, month: Month, day: u8, year: u16) -> Result<Self, CodeError> {
        check_range(Field::Milkfat, u32::from(milkfat), 0, u32::from(MILKFAT_MAX))?;
        check_range(Field::Day, u32::from(day), u32::from(DAY_MIN), u32::from(DAY_MAX))?;
        check_range(Field::Year, u32::from(year), u32::from(YEAR_MIN), u32::from(YEAR_MAX))?;

        Ok(Self {
            milkfat,
            month,
            day,
            year,
        })
    }

    /// Build a code whose ranges the caller already guarantees
    pub(crate) const fn from_parts(milkfat: u8, month: Month, day: u8, year: u16) -> Self {
        Self {
            milkfat,
            month,
            day,
            year,
        }
    }

    #[inline]
    #[must_use]
    pub const fn milkfat(&self) -> u8 {
        self.milkfat
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Milkfat zero-padded to three digits ("000" through "100")
    #[must_use]
    pub fn milkfat_digits(&self) -> String {
        format!("{:0width$}", self.milkfat, width = MILKFAT_DIGITS)
    }

    /// Day zero-padded to two digits
    #[must_use]
    pub fn day_digits(&self) -> String {
        format!("{:0width$}", self.day, width = DAY_DIGITS)
    }

    /// Year zero-padded to four digits
    #[must_use]
    pub fn year_digits(&self) -> String {
        format!("{:0width$}", self.year, width = YEAR_DIGITS)
    }

    /// Parse a code from its four fields given separately
    ///
    /// # Errors
    /// Returns a `CodeError` naming the first field that fails to parse.
    pub fn from_fields(milkfat: &str, month: &str, day: &str, year: &str) -> Result<Self, CodeError> {
        let milkfat = parse_digit_field(Field::Milkfat, milkfat)?;
        let month: Month = month.parse()?;
        let day = parse_digit_field(Field::Day, day)?;
        let year = parse_digit_field(Field::Year, year)?;

        check_range(Field::Milkfat, milkfat, 0, u32::from(MILKFAT_MAX))?;
        check_range(Field::Day, day, u32::from(DAY_MIN), u32::from(DAY_MAX))?;
        check_range(Field::Year, year, u32::from(YEAR_MIN), u32::from(YEAR_MAX))?;

        Ok(Self::from_parts(milkfat as u8, month, day as u8, year as u16))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {} {} {}",
            self.milkfat_digits(),
            self.month,
            self.day_digits(),
            self.year_digits()
        )
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse "milkfat month day year", separated by whitespace, `/`, `,` or `-`
    ///
    /// A trailing `%` on the milkfat is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '-'))
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [milkfat, month, day, year] => {
                Self::from_fields(milkfat.trim_end_matches('%'), month, day, year)
            }
            _ => Err(CodeError::FieldCount(parts.len())),
        }
    }
}

fn check_range(field: Field, value: u32, min: u32, max: u32) -> Result<(), CodeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CodeError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parse a digit-only field no wider than the field's width
fn parse_digit_field(field: Field, input: &str) -> Result<u32, CodeError> {
    let input = input.trim();
    let width = field.width().unwrap_or(0);

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeError::NotDigits {
            field,
            input: input.to_string(),
        });
    }

    if input.len() > width {
        return Err(CodeError::TooWide {
            field,
            width,
            input: input.to_string(),
        });
    }

    // At most four ASCII digits, always fits
    input.parse().map_err(|_| CodeError::NotDigits {
        field,
        input: input.to_string(),
    })
}

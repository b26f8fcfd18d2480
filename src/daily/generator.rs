//! Secret generators
//!
//! Defines the `SecretGenerator` trait and the two concrete schemes.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{Month, SecretCode};

/// Earliest year a secret can expire in
pub const YEAR_FLOOR: i32 = 1886;

/// Number of milkfat values (0-100)
const MILKFAT_SPAN: f64 = 101.0;
/// Generated days stop at 28 regardless of month length
const DAY_SPAN: f64 = 28.0;

/// Derives the secret code for a calendar date
pub trait SecretGenerator {
    /// Produce the secret for `date`. Must be deterministic in `date`.
    fn generate(&self, date: NaiveDate) -> SecretCode;
}

/// Runtime choice of generator, selectable from the CLI or config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Single sine-hash fraction shared by every field (the published daily answers)
    #[default]
    Legacy,
    /// Each field drawn independently from a date-seeded `StdRng`
    Independent,
}

impl GeneratorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Independent => "independent",
        }
    }
}

impl SecretGenerator for GeneratorKind {
    fn generate(&self, date: NaiveDate) -> SecretCode {
        match self {
            Self::Legacy => LegacyGenerator.generate(date),
            Self::Independent => IndependentGenerator.generate(date),
        }
    }
}

/// The published daily scheme
///
/// One pseudo-random fraction is derived from the date and reused for all
/// four fields, so the fields are fully correlated. It is weak, but it is what
/// reproduces the published answers, so the arithmetic here must not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyGenerator;

impl SecretGenerator for LegacyGenerator {
    fn generate(&self, date: NaiveDate) -> SecretCode {
        let fraction = seed_fraction(date_seed(date));
        let span = f64::from(year_span(date));

        let milkfat = scale(fraction, MILKFAT_SPAN).min(100);
        let month = Month::ALL[scale(fraction, 12.0).min(11) as usize];
        let day = scale(fraction, DAY_SPAN).min(27) + 1;
        let year = i64::from(YEAR_FLOOR) + i64::from(scale(fraction, span));

        SecretCode::from_parts(milkfat as u8, month, day as u8, clamp_year(year))
    }
}

/// Independent per-field draws from a date-seeded RNG
///
/// Same ranges as the legacy scheme, without the cross-field correlation.
/// Answers differ from the published ones, so this is opt-in only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndependentGenerator;

impl SecretGenerator for IndependentGenerator {
    fn generate(&self, date: NaiveDate) -> SecretCode {
        let mut rng = StdRng::seed_from_u64(date_seed(date) as u64);
        let last_year = YEAR_FLOOR + year_span(date) - 1;

        let milkfat: u8 = rng.random_range(0..=100);
        let month = Month::ALL[rng.random_range(0..12usize)];
        let day: u8 = rng.random_range(1..=28);
        let year = rng.random_range(YEAR_FLOOR..=last_year);

        SecretCode::from_parts(milkfat, month, day, clamp_year(i64::from(year)))
    }
}

/// The ISO date's digits read as one integer: 2024-03-07 becomes 20240307
#[must_use]
pub fn date_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Sine hash of the seed, in `[0, 1)`
///
/// `x = sin(seed) * 10000`, keeping only the fractional part.
#[must_use]
pub fn seed_fraction(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Number of possible years for a secret generated on `date`
///
/// Years run from the floor through the date's own year. Dates before the
/// floor still get a single-year span.
fn year_span(date: NaiveDate) -> i32 {
    (date.year() - YEAR_FLOOR + 1).max(1)
}

/// `floor(fraction * span)`
fn scale(fraction: f64, span: f64) -> u32 {
    (fraction * span).floor() as u32
}

fn clamp_year(year: i64) -> u16 {
    year.clamp(i64::from(YEAR_FLOOR), i64::from(crate::core::code::YEAR_MAX)) as u16
}

//! Daily secret derivation
//!
//! Every calendar date maps to exactly one secret. The default generator
//! reproduces the published daily answers; see [`GeneratorKind`].

mod generator;

pub use generator::{
    GeneratorKind, IndependentGenerator, LegacyGenerator, SecretGenerator, YEAR_FLOOR, date_seed,
    seed_fraction,
};

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use crate::core::SecretCode;

/// Secret for `date` using the legacy generator
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use curdle::daily::generate_daily_code;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(generate_daily_code(date), generate_daily_code(date));
/// ```
#[must_use]
pub fn generate_daily_code(date: NaiveDate) -> SecretCode {
    LegacyGenerator.generate(date)
}

/// Today's puzzle date
///
/// Puzzles roll over at midnight UTC, matching the ISO date used for the seed.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Pick a puzzle date uniformly from the `window` days before `today`
///
/// Falls back to `today` if the window is empty.
pub fn random_past_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, window: u64) -> NaiveDate {
    if window == 0 {
        return today;
    }

    let back = rng.random_range(1..=window);
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn daily_code_uses_legacy_scheme() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(generate_daily_code(date), LegacyGenerator.generate(date));
    }

    #[test]
    fn daily_code_changes_at_rollover() {
        let first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let second = first.succ_opt().unwrap();
        assert_ne!(generate_daily_code(first), generate_daily_code(second));
    }

    #[test]
    fn random_past_date_within_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        for _ in 0..100 {
            let picked = random_past_date(&mut rng, today, 30);
            assert!(picked < today);
            assert!((today - picked).num_days() <= 30);
        }
    }

    #[test]
    fn random_past_date_empty_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(random_past_date(&mut rng, today, 0), today);
    }
}

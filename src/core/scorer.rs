//! Guess scoring
//!
//! Digit fields use Wordle's rules, including proper handling of duplicate
//! digits. The month is a single cell: green on an exact match, yellow when
//! it is one month away (December and January are neighbours), black otherwise.

use serde::{Deserialize, Serialize};

use super::code::{DAY_DIGITS, MILKFAT_DIGITS, YEAR_DIGITS};
use super::{Code, FeedbackColor, Month};

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessResult {
    pub milkfat: [FeedbackColor; MILKFAT_DIGITS],
    pub month: FeedbackColor,
    pub day: [FeedbackColor; DAY_DIGITS],
    pub year: [FeedbackColor; YEAR_DIGITS],
}

impl GuessResult {
    /// All greens (the result of guessing the secret exactly)
    pub const PERFECT: Self = Self {
        milkfat: [FeedbackColor::Green; MILKFAT_DIGITS],
        month: FeedbackColor::Green,
        day: [FeedbackColor::Green; DAY_DIGITS],
        year: [FeedbackColor::Green; YEAR_DIGITS],
    };

    /// Check if every cell is green
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.cells().all(FeedbackColor::is_green)
    }

    /// All ten cells in display order: milkfat, month, day, year
    pub fn cells(&self) -> impl Iterator<Item = FeedbackColor> + '_ {
        self.milkfat
            .iter()
            .copied()
            .chain(std::iter::once(self.month))
            .chain(self.day.iter().copied())
            .chain(self.year.iter().copied())
    }

    /// Count the number of green cells
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.cells().filter(|c| c.is_green()).count()
    }

    /// Count the number of yellow cells
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.cells()
            .filter(|c| matches!(c, FeedbackColor::Yellow))
            .count()
    }

    /// Emoji row grouped by field, e.g. "🟩🟨⬛ 🟩 🟩🟩 🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        use super::feedback::row_to_emoji;

        format!(
            "{} {} {} {}",
            row_to_emoji(&self.milkfat),
            self.month.to_emoji(),
            row_to_emoji(&self.day),
            row_to_emoji(&self.year)
        )
    }
}

/// Score `guess` against `secret`
///
/// # Examples
/// ```
/// use curdle::core::{check_guess, is_winning_guess, Code, FeedbackColor, Month};
///
/// let secret = Code::new(42, Month::January, 15, 1999).unwrap();
/// let guess = Code::new(24, Month::December, 51, 1999).unwrap();
/// let result = check_guess(&secret, &guess);
///
/// assert_eq!(result.day, [FeedbackColor::Yellow, FeedbackColor::Yellow]);
/// assert_eq!(result.month, FeedbackColor::Yellow);
/// assert!(!is_winning_guess(&result));
/// ```
#[must_use]
pub fn check_guess(secret: &Code, guess: &Code) -> GuessResult {
    GuessResult {
        milkfat: compare_digits(u32::from(secret.milkfat()), u32::from(guess.milkfat())),
        month: compare_months(secret.month(), guess.month()),
        day: compare_digits(u32::from(secret.day()), u32::from(guess.day())),
        year: compare_digits(u32::from(secret.year()), u32::from(guess.year())),
    }
}

/// True when every digit and the month are green
#[must_use]
pub fn is_winning_guess(result: &GuessResult) -> bool {
    result.is_win()
}

/// Compare two values as zero-padded `N`-digit strings
///
/// # Algorithm
/// 1. First pass: mark exact position matches green; those target digits are used up
/// 2. Second pass: for each remaining guess digit, take the leftmost unused
///    matching target digit and mark yellow, otherwise black
#[must_use]
pub fn compare_digits<const N: usize>(target: u32, guess: u32) -> [FeedbackColor; N] {
    let target = padded_digits::<N>(target);
    let guess = padded_digits::<N>(guess);

    let mut result = [FeedbackColor::Black; N];
    let mut used = [false; N];

    // First pass: Mark greens
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..N {
        if guess[i] == target[i] {
            result[i] = FeedbackColor::Green;
            used[i] = true;
        }
    }

    // Second pass: Mark yellows from the remaining target digits
    #[allow(clippy::needless_range_loop)]
    for i in 0..N {
        if result[i].is_green() {
            continue;
        }

        if let Some(j) = (0..N).find(|&j| !used[j] && target[j] == guess[i]) {
            result[i] = FeedbackColor::Yellow;
            used[j] = true;
        }
    }

    result
}

/// Compare months by calendar index
#[must_use]
pub const fn compare_months(target: Month, guess: Month) -> FeedbackColor {
    match target.distance(guess) {
        0 => FeedbackColor::Green,
        1 | 11 => FeedbackColor::Yellow,
        _ => FeedbackColor::Black,
    }
}

/// Decimal digits of `value`, most significant first, left-padded with zeros
fn padded_digits<const N: usize>(value: u32) -> [u8; N] {
    let mut digits = [0u8; N];
    let mut rest = value;

    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::core::FeedbackColor::{Black, Green, Yellow};

    fn code(milkfat: u8, month: Month, day: u8, year: u16) -> Code {
        Code::new(milkfat, month, day, year).unwrap()
    }

    fn any_code() -> impl Strategy<Value = Code> {
        (0u8..=100, 0usize..12, 1u8..=31, 1000u16..=9999).prop_map(|(m, mi, d, y)| {
            code(m, Month::from_index(mi).unwrap(), d, y)
        })
    }

    #[test]
    fn padded_digits_boundaries() {
        assert_eq!(padded_digits::<3>(0), [0, 0, 0]);
        assert_eq!(padded_digits::<3>(100), [1, 0, 0]);
        assert_eq!(padded_digits::<2>(7), [0, 7]);
        assert_eq!(padded_digits::<4>(1886), [1, 8, 8, 6]);
    }

    #[test]
    fn digits_all_black() {
        assert_eq!(compare_digits::<3>(123, 456), [Black, Black, Black]);
    }

    #[test]
    fn digits_swapped_day() {
        // 15 vs 51: both digits present, both misplaced
        assert_eq!(compare_digits::<2>(15, 51), [Yellow, Yellow]);
    }

    #[test]
    fn digits_duplicate_guess_digit_not_double_counted() {
        // Target 112, guess 211: the middle 1 is exact, the 2 is misplaced,
        // and the last 1 takes the remaining unused 1 at position 0
        assert_eq!(compare_digits::<3>(112, 211), [Yellow, Green, Yellow]);

        // Target has a single 1, guess has three: only the green one counts
        assert_eq!(compare_digits::<3>(100, 111), [Green, Black, Black]);

        // Target "005" has a single 5, guess has two misplaced 5s: only one
        // yellow, while the trailing 0 picks up a leading target 0
        assert_eq!(compare_digits::<3>(5, 550), [Yellow, Black, Yellow]);
    }

    #[test]
    fn digits_green_consumes_target_digit() {
        // Target 121, guess 211: last 1 is green, so the first guess 1 may
        // only use the target 1 at position 0
        assert_eq!(compare_digits::<3>(121, 211), [Yellow, Yellow, Green]);

        // Target 112, guess 121: first 1 green, second target 1 is still free
        assert_eq!(compare_digits::<3>(112, 121), [Green, Yellow, Yellow]);
    }

    #[test]
    fn digits_zero_padding_participates() {
        // 7 renders as "007" and 700 as "700"
        assert_eq!(compare_digits::<3>(7, 700), [Yellow, Green, Yellow]);
    }

    #[test]
    fn months_wrap_and_adjacency() {
        assert_eq!(compare_months(Month::January, Month::January), Green);
        assert_eq!(compare_months(Month::January, Month::December), Yellow);
        assert_eq!(compare_months(Month::December, Month::January), Yellow);
        assert_eq!(compare_months(Month::January, Month::February), Yellow);
        assert_eq!(compare_months(Month::January, Month::March), Black);
        assert_eq!(compare_months(Month::January, Month::November), Black);
        assert_eq!(compare_months(Month::June, Month::July), Yellow);
    }

    #[test]
    fn check_guess_exact_is_win() {
        let secret = code(3, Month::April, 28, 1955);
        let result = check_guess(&secret, &secret);

        assert_eq!(result, GuessResult::PERFECT);
        assert!(is_winning_guess(&result));
        assert_eq!(result.count_greens(), 10);
    }

    #[test]
    fn check_guess_month_alone_blocks_win() {
        let secret = code(3, Month::April, 28, 1955);
        let guess = code(3, Month::May, 28, 1955);
        let result = check_guess(&secret, &guess);

        assert_eq!(result.month, Yellow);
        assert!(!result.is_win());
        assert_eq!(result.count_greens(), 9);
        assert_eq!(result.count_yellows(), 1);
    }

    #[test]
    fn check_guess_mixed() {
        let secret = code(42, Month::January, 15, 1999);
        let guess = code(24, Month::March, 51, 1989);
        let result = check_guess(&secret, &guess);

        // "042" vs "024"
        assert_eq!(result.milkfat, [Green, Yellow, Yellow]);
        assert_eq!(result.month, Black);
        assert_eq!(result.day, [Yellow, Yellow]);
        // "1999" vs "1989"
        assert_eq!(result.year, [Green, Green, Black, Green]);
    }

    #[test]
    fn guess_result_emoji() {
        let secret = code(42, Month::January, 15, 1999);
        let guess = code(24, Month::March, 51, 1989);
        let result = check_guess(&secret, &guess);

        assert_eq!(result.to_emoji(), "🟩🟨🟨 ⬛ 🟨🟨 🟩🟩⬛🟩");
    }

    proptest! {
        #[test]
        fn self_match_is_always_perfect(secret in any_code()) {
            let result = check_guess(&secret, &secret);
            prop_assert!(is_winning_guess(&result));
        }

        #[test]
        fn marks_never_exceed_target_occurrences(target in 0u32..1000, guess in 0u32..1000) {
            let result = compare_digits::<3>(target, guess);
            let t = padded_digits::<3>(target);
            let g = padded_digits::<3>(guess);

            for digit in 0u8..10 {
                let in_target = t.iter().filter(|&&d| d == digit).count();
                let marked = (0..3)
                    .filter(|&i| g[i] == digit && result[i] != Black)
                    .count();
                prop_assert!(marked <= in_target);
            }
        }

        #[test]
        fn greens_are_exact_positions(target in 0u32..10000, guess in 0u32..10000) {
            let result = compare_digits::<4>(target, guess);
            let t = padded_digits::<4>(target);
            let g = padded_digits::<4>(guess);

            for i in 0..4 {
                prop_assert_eq!(result[i] == Green, t[i] == g[i]);
            }
        }
    }
}

//! Lifetime statistics across daily puzzles

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GameSession, MAX_GUESSES, Outcome};

/// Played/won counts, streaks and the guess distribution
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by guess count: index 0 is a win on the first guess
    pub guess_distribution: [u32; MAX_GUESSES],
    pub last_played: Option<NaiveDate>,
    pub last_won: Option<NaiveDate>,
}

impl Statistics {
    /// Fold a finished session into the totals
    ///
    /// Unfinished sessions and dates already recorded are ignored, so calling
    /// this again after a reload does not double count. Returns whether the
    /// statistics changed.
    pub fn record(&mut self, session: &GameSession) -> bool {
        let date = session.date();
        if !session.is_over() || self.last_played.is_some_and(|d| d >= date) {
            return false;
        }

        self.played += 1;
        self.last_played = Some(date);

        match session.outcome() {
            Outcome::Won(guesses) => {
                self.won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses.saturating_sub(1)) {
                    *slot += 1;
                }

                let continues = self
                    .last_won
                    .is_some_and(|prev| prev.succ_opt() == Some(date));
                self.current_streak = if continues { self.current_streak + 1 } else { 1 };
                self.max_streak = self.max_streak.max(self.current_streak);
                self.last_won = Some(date);
            }
            Outcome::Lost | Outcome::InProgress => {
                self.current_streak = 0;
            }
        }

        true
    }

    /// Percentage of played games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }

    /// Average guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }

        let total: u32 = self
            .guess_distribution
            .iter()
            .zip(1u32..)
            .map(|(&count, guesses)| count * guesses)
            .sum();
        Some(f64::from(total) / f64::from(self.won))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Month};
    use crate::daily::GeneratorKind;

    fn secret() -> Code {
        Code::new(48, Month::June, 14, 1953).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn won_in(date: NaiveDate, misses: u8) -> GameSession {
        let mut session = GameSession::new(date, GeneratorKind::Legacy);
        for n in 0..misses {
            session
                .submit(&secret(), Code::new(n, Month::January, 1, 2000).unwrap())
                .unwrap();
        }
        session.submit(&secret(), secret()).unwrap();
        session
    }

    fn lost(date: NaiveDate) -> GameSession {
        let mut session = GameSession::new(date, GeneratorKind::Legacy);
        for n in 0..6 {
            session
                .submit(&secret(), Code::new(n, Month::January, 1, 2000).unwrap())
                .unwrap();
        }
        session
    }

    #[test]
    fn stats_ignore_unfinished_sessions() {
        let mut stats = Statistics::default();
        assert!(!stats.record(&GameSession::new(day(1), GeneratorKind::Legacy)));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn stats_count_wins_and_distribution() {
        let mut stats = Statistics::default();
        assert!(stats.record(&won_in(day(1), 0)));
        assert!(stats.record(&won_in(day(2), 2)));

        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 0]);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.average_guesses(), Some(2.0));
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_recording_is_idempotent() {
        let mut stats = Statistics::default();
        let session = won_in(day(3), 1);
        assert!(stats.record(&session));
        assert!(!stats.record(&session));
        assert_eq!(stats.played, 1);
    }

    #[test]
    fn stats_loss_and_gap_reset_streak() {
        let mut stats = Statistics::default();
        stats.record(&won_in(day(1), 0));
        stats.record(&lost(day(2)));
        assert_eq!(stats.current_streak, 0);

        stats.record(&won_in(day(3), 0));
        stats.record(&won_in(day(5), 0)); // Skipped day 4
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.played, 4);
        assert_eq!(stats.won, 3);
    }
}

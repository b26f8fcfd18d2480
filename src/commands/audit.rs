//! Generator audit
//!
//! Generates the secret for every date in a range and summarises how the
//! answers spread out: distinct codes, repeats, and field distributions.

use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{Code, SecretCode};
use crate::daily::{GeneratorKind, SecretGenerator};

/// Summary of secrets over a date range
#[derive(Debug)]
pub struct AuditResult {
    pub generator: GeneratorKind,
    pub from: NaiveDate,
    pub days: usize,
    pub distinct_codes: usize,
    /// Codes produced for more than one date
    pub repeated_codes: usize,
    pub most_common: Option<(Code, usize)>,
    /// Dates per month, January first
    pub month_counts: [usize; 12],
    pub milkfat_range: (u8, u8),
    pub milkfat_mean: f64,
    pub year_range: (u16, u16),
    pub duration: Duration,
}

/// Generate secrets for `days` consecutive dates starting at `from`
///
/// Dates past the end of the calendar are skipped.
#[must_use]
pub fn run_audit(generator: GeneratorKind, from: NaiveDate, days: u64, show_progress: bool) -> AuditResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(days)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let secrets: Vec<SecretCode> = (0..days)
        .into_par_iter()
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .map(|date| {
            pb.inc(1);
            generator.generate(date)
        })
        .collect();

    pb.finish_and_clear();
    log::debug!("audited {} dates with {} generator", secrets.len(), generator.as_str());

    summarize(generator, from, &secrets, start.elapsed())
}

fn summarize(
    generator: GeneratorKind,
    from: NaiveDate,
    secrets: &[SecretCode],
    duration: Duration,
) -> AuditResult {
    let mut counts: FxHashMap<Code, usize> = FxHashMap::default();
    let mut month_counts = [0usize; 12];
    let mut milkfat_range = (u8::MAX, u8::MIN);
    let mut year_range = (u16::MAX, u16::MIN);
    let mut milkfat_total = 0u64;

    for secret in secrets {
        *counts.entry(*secret).or_insert(0) += 1;
        month_counts[secret.month().index()] += 1;
        milkfat_total += u64::from(secret.milkfat());

        milkfat_range.0 = milkfat_range.0.min(secret.milkfat());
        milkfat_range.1 = milkfat_range.1.max(secret.milkfat());
        year_range.0 = year_range.0.min(secret.year());
        year_range.1 = year_range.1.max(secret.year());
    }

    if secrets.is_empty() {
        milkfat_range = (0, 0);
        year_range = (0, 0);
    }

    let repeated_codes = counts.values().filter(|&&n| n > 1).count();
    // Ties resolve to the earliest-sorting code so output is stable
    let most_common = counts
        .iter()
        .filter(|&(_, &n)| n > 1)
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(&code, &n)| (code, n));

    let milkfat_mean = if secrets.is_empty() {
        0.0
    } else {
        milkfat_total as f64 / secrets.len() as f64
    };

    AuditResult {
        generator,
        from,
        days: secrets.len(),
        distinct_codes: counts.len(),
        repeated_codes,
        most_common,
        month_counts,
        milkfat_range,
        milkfat_mean,
        year_range,
        duration,
    }
}

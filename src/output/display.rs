//! Display functions for game state and command results

use chrono::NaiveDate;
use colored::Colorize;

use super::formatters::{board_header, create_progress_bar, format_guess_row};
use crate::commands::AuditResult;
use crate::core::{GuessResult, SecretCode};
use crate::daily::GeneratorKind;
use crate::game::{GameSession, MAX_GUESSES, Outcome, Statistics};

/// Print the guess board so far
pub fn print_board(session: &GameSession) {
    println!("\n   {}", board_header().bright_black());

    for (i, (guess, result)) in session.history().enumerate() {
        println!("{} {}", (i + 1).to_string().bright_black(), format_guess_row(guess, result));
    }

    for i in session.guesses().len()..MAX_GUESSES {
        println!("{}", (i + 1).to_string().bright_black());
    }
    println!();
}

/// Print the end-of-game banner with the answer
pub fn print_game_over(session: &GameSession, secret: &SecretCode) {
    println!("{}", "═".repeat(60).bright_cyan());

    match session.outcome() {
        Outcome::Won(guesses) => {
            let praise = match guesses {
                1 => "🥛 Hole in one! Fresh from the cow!",
                2 => "🧀 Magnificent! Two guesses!",
                3 => "✨ Splendid! Three guesses!",
                4 => "👏 Great job! Four guesses!",
                5 => "🎉 Nice work! Five guesses!",
                _ => "😅 Phew! Got it in six!",
            };
            println!("  {}", praise.bright_green().bold());
        }
        Outcome::Lost => println!("  {}", "🤢 Curdled! Out of guesses.".red().bold()),
        Outcome::InProgress => {}
    }

    println!("\n  The correct answer was:");
    println!("  {}", format_guess_row(secret, &GuessResult::PERFECT));
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print lifetime statistics
pub fn print_stats(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.played);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    if let Some(avg) = stats.average_guesses() {
        println!("   Average guesses: {}", format!("{avg:.2}").bright_yellow());
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print the secret for a date (spoiler)
pub fn print_reveal(date: NaiveDate, secret: &SecretCode, generator: GeneratorKind) {
    println!(
        "\nAnswer for {} ({} generator):",
        date.to_string().bright_yellow().bold(),
        generator.as_str()
    );
    println!("  {}\n", format_guess_row(secret, &GuessResult::PERFECT));
}

/// Print the result of a generator audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Generator:        {}", result.generator.as_str());
    println!("   Dates:            {} from {}", result.days, result.from);
    println!(
        "   Distinct codes:   {}",
        format!("{}", result.distinct_codes).bright_yellow().bold()
    );
    println!("   Repeated codes:   {}", result.repeated_codes);
    if let Some((code, count)) = &result.most_common {
        println!("   Most common:      {code} ({count}x)");
    }
    println!(
        "   Milkfat range:    {}-{} (mean {:.1})",
        result.milkfat_range.0, result.milkfat_range.1, result.milkfat_mean
    );
    println!("   Year range:       {}-{}", result.year_range.0, result.year_range.1);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Months:".bright_cyan().bold());
    let max = result.month_counts.iter().copied().max().unwrap_or(0);
    for (month, &count) in crate::core::Month::ALL.iter().zip(&result.month_counts) {
        let bar = create_progress_bar(count as f64, max as f64, 40);
        println!("   {}: {} {count:5}", month.abbreviation(), bar.green());
    }
    println!();
}

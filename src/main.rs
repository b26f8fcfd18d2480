//! Curdle - CLI
//!
//! Daily milkfat-and-expiry guessing game with TUI and CLI modes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use curdle::{
    commands::{run_audit, run_simple, submit_guess},
    config::{UserConfig, get_config_path, load_config, save_config_to},
    core::Code,
    daily::{GeneratorKind, SecretGenerator, random_past_date, today},
    game::GameSession,
    output::{print_audit_result, print_board, print_game_over, print_reveal, print_stats},
    storage::{JsonFileStore, MemoryStore, SessionStore, default_data_dir, load_or_new},
};

/// How far back `practice` reaches when picking a random date
const PRACTICE_WINDOW_DAYS: u64 = 365;

#[derive(Parser)]
#[command(
    name = "curdle",
    about = "Guess the milkfat and expiration date of today's carton in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret generator (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    generator: Option<GeneratorKind>,

    /// Directory for saved sessions and statistics (overrides the config file)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Submit one guess to today's puzzle
    Guess {
        /// Milkfat percentage, 0-100
        milkfat: String,
        /// Month name, abbreviation or number
        month: String,
        /// Day of the month
        day: String,
        /// Four-digit year
        year: String,
    },

    /// Print the emoji grid for today's puzzle
    Share,

    /// Show win rate, streaks and guess distribution
    Stats,

    /// Print the answer for a date (spoilers!)
    Reveal {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Play a past puzzle without touching saved progress
    Practice {
        /// Date as YYYY-MM-DD (default: random day from the past year)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Generate secrets over a date range and summarise them
    Audit {
        /// First date as YYYY-MM-DD (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of consecutive dates
        #[arg(short = 'n', long, default_value = "3650")]
        days: u64,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show the effective configuration, saving any options given
    Config {
        /// Generator to store in the config file
        #[arg(long, value_enum)]
        generator: Option<GeneratorKind>,

        /// Data directory to store in the config file
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the alternate screen
    if !matches!(command, Commands::Play) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let file_config = load_config();
    let config = file_config
        .clone()
        .with_overrides(cli.generator, cli.data_dir);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Guess {
            milkfat,
            month,
            day,
            year,
        } => run_guess_command(&config, &milkfat, &month, &day, &year),
        Commands::Share => run_share_command(&config),
        Commands::Stats => {
            let stats = open_store(&config)?.load_stats()?;
            print_stats(&stats);
            Ok(())
        }
        Commands::Reveal { date } => {
            let date = date.unwrap_or_else(today);
            print_reveal(date, &config.generator.generate(date), config.generator);
            Ok(())
        }
        Commands::Practice { date } => run_practice_command(&config, date),
        Commands::Audit {
            from,
            days,
            no_progress,
        } => {
            println!("Generating {days} secrets with the {} generator...", config.generator.as_str());
            let result = run_audit(config.generator, from.unwrap_or_else(today), days, !no_progress);
            print_audit_result(&result);
            Ok(())
        }
        Commands::Config {
            generator,
            data_dir,
        } => run_config_command(file_config, generator, data_dir),
    }
}

fn open_store(config: &UserConfig) -> Result<JsonFileStore> {
    let store = match &config.data_dir {
        Some(dir) => JsonFileStore::new(dir),
        None => JsonFileStore::in_default_dir()?,
    };
    log::debug!("using data directory {}", store.dir().display());
    Ok(store)
}

fn run_play_command(config: &UserConfig) -> Result<()> {
    use curdle::interactive::{App, run_tui};

    let date = today();
    let secret = config.generator.generate(date);
    let mut store = open_store(config)?;
    let session = load_or_new(&store, date, config.generator)?;

    let app = App::new(secret, session, &mut store);
    run_tui(app)
}

fn run_simple_command(config: &UserConfig) -> Result<()> {
    let date = today();
    let secret = config.generator.generate(date);
    let mut store = open_store(config)?;
    let session = load_or_new(&store, date, config.generator)?;

    run_simple(&secret, session, &mut store, true)
}

fn run_guess_command(
    config: &UserConfig,
    milkfat: &str,
    month: &str,
    day: &str,
    year: &str,
) -> Result<()> {
    let guess = Code::from_fields(milkfat.trim_end_matches('%'), month, day, year)?;
    let mut store = open_store(config)?;

    let outcome = submit_guess(&mut store, config.generator, today(), guess)?;
    print_board(&outcome.session);

    if outcome.session.is_over() {
        print_game_over(&outcome.session, &outcome.secret);
        println!("{}\n", outcome.session.share_text());
    } else {
        println!("{} guesses left.\n", outcome.session.remaining());
    }
    Ok(())
}

fn run_share_command(config: &UserConfig) -> Result<()> {
    let store = open_store(config)?;
    match store.load(today(), config.generator)? {
        Some(session) if !session.guesses().is_empty() => println!("{}", session.share_text()),
        _ => println!("No guesses yet today. Run `curdle play` to start."),
    }
    Ok(())
}

fn run_practice_command(config: &UserConfig, date: Option<NaiveDate>) -> Result<()> {
    let today = today();
    let date =
        date.unwrap_or_else(|| random_past_date(&mut rand::rng(), today, PRACTICE_WINDOW_DAYS));
    println!("Practice puzzle from {date} (progress is not saved)");

    let secret = config.generator.generate(date);
    let mut store = MemoryStore::default();
    run_simple(&secret, GameSession::new(date, config.generator), &mut store, false)
}

fn run_config_command(
    mut config: UserConfig,
    generator: Option<GeneratorKind>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let path = get_config_path().context("no config directory on this platform")?;

    if generator.is_some() || data_dir.is_some() {
        config = config.with_overrides(generator, data_dir);
        save_config_to(&path, &config)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved {}", path.display());
    }

    println!("Config file: {}", path.display());
    println!("Generator:   {}", config.generator.as_str());
    let data_dir = config.data_dir.clone().or_else(default_data_dir);
    match data_dir {
        Some(dir) => println!("Data dir:    {}", dir.display()),
        None => println!("Data dir:    (none available)"),
    }
    Ok(())
}

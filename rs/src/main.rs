//! WikiGuess command-line front end
//!
//! Thin wrapper over the library: resolves the article pool, runs one
//! command and prints the result as JSON.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use wikiguess::constants::{DEFAULT_PREVIEW_DAYS, MATCH_THRESHOLD};
use wikiguess::matcher::check_guess_with_threshold;
use wikiguess::selector::{date_key, today};
use wikiguess::{builtin_pool, load_pool, ArticlePool, CheckGuessParams, GuessVerdict};

#[derive(Parser)]
#[command(name = "wikiguess")]
#[command(about = "WikiGuess daily article selection and guess checking")]
struct Args {
    /// JSON file with a replacement category pool
    #[arg(long, global = true)]
    pool: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's article (UTC)
    Today,

    /// Show the article for a date key
    Select {
        /// Date key, normally YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Preview the articles for upcoming days
    Upcoming {
        /// First day of the preview (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of days to show
        #[arg(long, default_value_t = DEFAULT_PREVIEW_DAYS)]
        days: u32,
    },

    /// Check a guess against an article title
    Check {
        #[arg(long)]
        guess: String,

        #[arg(long)]
        title: String,

        /// Minimum similarity for a correct guess
        #[arg(long, default_value_t = MATCH_THRESHOLD)]
        threshold: f64,
    },

    /// List every article in the pool
    Articles,

    /// Print JSON schemas for the guess request and response
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("wikiguess={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("WikiGuess version: {}", wikiguess::VERSION);

    let loaded;
    let pool: &ArticlePool = match &args.pool {
        Some(path) => {
            loaded = load_pool(path)
                .await
                .with_context(|| format!("Failed to load article pool from {}", path.display()))?;
            &loaded
        }
        None => builtin_pool(),
    };

    run(args.command, pool)
}

fn run(command: Command, pool: &ArticlePool) -> wikiguess::Result<()> {
    match command {
        Command::Today => {
            let date = today();
            tracing::info!("Selecting article for {}", date_key(date));
            print_json(&pool.dated(date))
        }
        Command::Select { date } => print_json(&pool.select(&date)),
        Command::Upcoming { start, days } => {
            let start = start.unwrap_or_else(today);
            print_json(&pool.upcoming(start, days))
        }
        Command::Check {
            guess,
            title,
            threshold,
        } => {
            let verdict = check_guess_with_threshold(&guess, &title, threshold)
                .context("Failed to check guess")?;
            print_json(&verdict)
        }
        Command::Articles => print_json(&pool.all_articles()),
        Command::Schema => {
            print_json(&schemars::schema_for!(CheckGuessParams))?;
            print_json(&schemars::schema_for!(GuessVerdict))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> wikiguess::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

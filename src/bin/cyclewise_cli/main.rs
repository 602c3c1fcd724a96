// ABOUTME: Cyclewise CLI - command-line front end for the cycle-and-symptom pattern engine
// ABOUTME: Analyzes entry logs, lists detected cycle starts, and edits start overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors
//!
//! Usage:
//! ```bash
//! # Analyze a log as of today
//! cyclewise-cli analyze --log entries.json
//!
//! # Analyze as of a fixed date with explicit settings, JSON output
//! cyclewise-cli analyze --log entries.json --settings settings.json --today 2024-03-10 --json
//!
//! # List detected cycle starts
//! cyclewise-cli starts --log entries.json
//!
//! # Mark a day as a cycle start (clears any other marked start)
//! cyclewise-cli mark-start --log entries.json --date 2024-03-01
//!
//! # Remove a marked start
//! cyclewise-cli clear-start --log entries.json --date 2024-03-01
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cyclewise::errors::{AppError, AppResult};
use cyclewise::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "cyclewise-cli",
    about = "Cyclewise pattern engine CLI",
    long_about = "Command-line front end for the Cyclewise cycle-and-symptom pattern engine. Reads JSON entry logs; never modifies them unless asked to write an edited copy."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the full analysis for one day
    Analyze {
        /// Entry log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Tracking settings JSON file (defaults to the user config directory)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Analysis date, YYYY-MM-DD (defaults to CYCLEWISE_TODAY, then the local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List detected cycle start dates
    Starts {
        /// Entry log JSON file
        #[arg(long)]
        log: PathBuf,
    },

    /// Mark a date as the cycle start, clearing other marked starts
    MarkStart {
        /// Entry log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Date to mark, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Where to write the edited log (defaults to overwriting --log)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Remove the cycle start mark from a date
    ClearStart {
        /// Entry log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Date to clear, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Where to write the edited log (defaults to overwriting --log)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(err.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|err| AppError::internal(format!("failed to initialize logging: {err}")))?;

    info!("Cyclewise CLI");

    match cli.command {
        Command::Analyze {
            log,
            settings,
            today,
            json,
        } => commands::analyze::run(&log, settings.as_deref(), today, json),
        Command::Starts { log } => commands::starts::run(&log),
        Command::MarkStart { log, date, output } => {
            commands::overrides::mark(&log, date, output.as_deref())
        }
        Command::ClearStart { log, date, output } => {
            commands::overrides::clear(&log, date, output.as_deref())
        }
    }
}

//! Metagram - CLI
//!
//! Finds chains of dictionary words from a start word to an end word, changing
//! one character per step.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use metagram::{
    commands::run_search,
    config::{RawArgs, validate},
    error::MetagramError,
    output::{ConsoleSink, print_search_summary},
};
use std::path::PathBuf;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "metagram",
    about = "Find word ladders between two words of equal length",
    version,
    author
)]
struct Cli {
    /// Dictionary file, one word per line
    #[arg(short, long = "dict", value_name = "DICTIONARY")]
    dict: Option<PathBuf>,

    /// Word to start from
    #[arg(short, long, value_name = "WORD")]
    start: Option<String>,

    /// Word to reach
    #[arg(short, long, value_name = "WORD")]
    end: Option<String>,

    /// Lower-case dictionary entries too (by default only the two words are)
    #[arg(long)]
    fold_case: bool,

    /// Print a summary after the search
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {e}").red());
        let code = e
            .downcast_ref::<MetagramError>()
            .map_or(1, MetagramError::exit_code);
        process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = validate(RawArgs {
        dictionary: cli.dict,
        start: cli.start,
        end: cli.end,
        fold_case: cli.fold_case,
    })?;

    let report = run_search(&config, &mut ConsoleSink)?;

    if cli.stats {
        print_search_summary(&report);
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

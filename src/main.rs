// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prime_progressions::{run, Config, DEFAULT_BOUND};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "progressions")]
#[command(author, version, about = "Print maximal arithmetic progressions of primes below 1000")]
struct Cli {
    /// File holding the table size; standard input when omitted
    input: Option<PathBuf>,

    /// Raise the log level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, 2) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the progressions.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    let config = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open input file: {}", path.display()))?;
            Config::read_from(file, DEFAULT_BOUND)
        }
        None => Config::read_from(io::stdin().lock(), DEFAULT_BOUND),
    }
    .context("Invalid input")?;

    let stdout = io::stdout().lock();
    run(&config, BufWriter::new(stdout)).context("Search failed")?;
    Ok(())
}

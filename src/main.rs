//! floatdiff CLI
//!
//! Prints the sum and mean absolute difference between a reference f32 dump
//! and a candidate f32 dump, one value per line.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use floatdiff::config::{DEFAULT_CANDIDATE_PATH, DEFAULT_REFERENCE_PATH};
use floatdiff::{run, CompareConfig, Reporter, TrailingBytes};

/// Compare two raw f32 output dumps
#[derive(Parser, Debug)]
#[command(name = "floatdiff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reference dump (authoritative backend output)
    #[arg(value_name = "REFERENCE", default_value = DEFAULT_REFERENCE_PATH)]
    reference: PathBuf,

    /// Candidate dump (backend under test)
    #[arg(value_name = "CANDIDATE", default_value = DEFAULT_CANDIDATE_PATH)]
    candidate: PathBuf,

    /// Fail on files whose size is not a positive multiple of 4 bytes
    #[arg(long)]
    strict_size: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn to_config(&self) -> CompareConfig {
        let trailing_bytes = if self.strict_size {
            TrailingBytes::Reject
        } else {
            TrailingBytes::Truncate
        };
        CompareConfig::new(&self.reference, &self.candidate).with_trailing_bytes(trailing_bytes)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.to_config();
    let stats = run(&config).with_context(|| {
        format!(
            "comparing {} against {}",
            config.candidate.display(),
            config.reference.display()
        )
    })?;

    let stdout = io::stdout();
    Reporter::new(stdout.lock())
        .report(&stats)
        .context("writing results to stdout")?;

    Ok(())
}

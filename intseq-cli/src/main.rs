//! intseq-cli - command-line driver for integer sequences
//!
//! Sequences are read as a count followed by that many integers, separated
//! by any whitespace, from `--input` or standard input.
//!
//! Usage:
//!   intseq-cli merge [--descending]
//!   intseq-cli sort [--descending] [--from <N> --to <N>]
//!   intseq-cli search <ELEMENT>
//!   intseq-cli state
//!
//! Logging goes to standard error and is configured through `RUST_LOG`
//! (default `intseq=warn`).

mod commands;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::Commands;

#[derive(Parser)]
#[command(name = "intseq-cli")]
#[command(about = "Read, merge, sort, and search integer sequences")]
struct Cli {
    /// Read sequences from this file instead of standard input
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "intseq=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    tracing::debug!(input = ?cli.input, "reading sequences");

    let mut output = io::stdout().lock();
    commands::run(cli.command, input, &mut output)?;
    output.flush().context("failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[rstest]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn test_input_flag_is_global() {
        let cli = Cli::try_parse_from(["intseq-cli", "state", "--input", "numbers.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("numbers.txt")));
        assert!(matches!(cli.command, Commands::State));
    }

    #[rstest]
    fn test_sort_range_requires_both_bounds() {
        assert!(Cli::try_parse_from(["intseq-cli", "sort", "--from", "1"]).is_err());
        assert!(Cli::try_parse_from(["intseq-cli", "sort", "--from", "-1", "--to", "3"]).is_ok());
    }
}

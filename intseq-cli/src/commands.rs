//! Subcommand implementations.
//!
//! Every command reads from a buffered reader and writes to a writer, so
//! the same code runs against stdin/stdout and against in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use intseq::io::IntegerTokens;
use intseq::sequence::{IntSequence, SortDirection};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read two sequences, merge them into one ordered sequence, and print it
    Merge(MergeArgs),
    /// Read one sequence, sort it (or a range of it), and print it
    Sort(SortArgs),
    /// Read one sequence and print the index of an element, then the sequence
    Search(SearchArgs),
    /// Read one sequence and print whether it is ascending, descending, or unsorted
    State,
}

/// Requested order, ascending unless `--descending` is given
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Order from largest to smallest
    #[arg(long, short = 'd')]
    pub descending: bool,
}

impl OrderArgs {
    const fn direction(&self) -> SortDirection {
        if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Arguments for the merge subcommand
#[derive(Args, Debug)]
pub struct MergeArgs {
    #[command(flatten)]
    pub order: OrderArgs,
}

/// Arguments for the sort subcommand
#[derive(Args, Debug)]
pub struct SortArgs {
    #[command(flatten)]
    pub order: OrderArgs,

    /// First index of the range to sort (inclusive); negative sorts everything
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<isize>,

    /// Last index of the range to sort (inclusive); clamped to the last element
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<isize>,
}

/// Arguments for the search subcommand
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// The element to look for
    #[arg(allow_negative_numbers = true)]
    pub element: i32,
}

/// Runs `command` against `input`, printing results to `output`.
pub fn run<R: BufRead, W: Write>(command: Commands, input: R, output: &mut W) -> Result<()> {
    let mut tokens = IntegerTokens::new(input);

    match command {
        Commands::Merge(args) => {
            let mut first = read_sequence(&mut tokens, "first")?;
            let second = read_sequence(&mut tokens, "second")?;
            first.merge(&second, args.order.direction());
            print_sequence(&first, output)
        }
        Commands::Sort(args) => {
            let mut sequence = read_sequence(&mut tokens, "input")?;
            let direction = args.order.direction();
            match (args.from, args.to) {
                (Some(from), Some(to)) => sequence.sort_range(direction, from, to),
                _ => sequence.sort(direction),
            }
            print_sequence(&sequence, output)
        }
        Commands::Search(args) => {
            let mut sequence = read_sequence(&mut tokens, "input")?;
            let written = match sequence.search(args.element) {
                Some(index) => writeln!(output, "{index}"),
                None => writeln!(output, "not found"),
            };
            written.context("failed to write search result")?;
            print_sequence(&sequence, output)
        }
        Commands::State => {
            let sequence = read_sequence(&mut tokens, "input")?;
            writeln!(output, "{}", sequence.sorted_state()).context("failed to write state")
        }
    }
}

fn read_sequence<R: BufRead>(tokens: &mut IntegerTokens<R>, label: &str) -> Result<IntSequence> {
    let mut sequence = IntSequence::new();
    sequence
        .read_from(tokens)
        .with_context(|| format!("failed to read {label} sequence"))?;
    Ok(sequence)
}

fn print_sequence<W: Write>(sequence: &IntSequence, output: &mut W) -> Result<()> {
    sequence
        .write_to(output)
        .and_then(|()| writeln!(output))
        .context("failed to write sequence")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_to_string(command: Commands, input: &str) -> Result<String> {
        let mut output = Vec::new();
        run(command, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    const fn ascending() -> OrderArgs {
        OrderArgs { descending: false }
    }

    const fn descending() -> OrderArgs {
        OrderArgs { descending: true }
    }

    #[rstest]
    fn test_merge_ascending() {
        let output = run_to_string(
            Commands::Merge(MergeArgs { order: ascending() }),
            "3\n5 3 1\n2\n2 4\n",
        )
        .unwrap();
        assert_eq!(output, "1 2 3 4 5 \n");
    }

    #[rstest]
    fn test_merge_descending() {
        let output = run_to_string(
            Commands::Merge(MergeArgs {
                order: descending(),
            }),
            "2 1 3 1 2",
        )
        .unwrap();
        assert_eq!(output, "3 2 1 \n");
    }

    #[rstest]
    fn test_merge_with_empty_second_prints_first() {
        let output = run_to_string(
            Commands::Merge(MergeArgs { order: ascending() }),
            "2 9 1 0",
        )
        .unwrap();
        assert_eq!(output, "9 1 \n");
    }

    #[rstest]
    #[case(None, None, "1 2 3 4 \n")]
    #[case(Some(1), Some(2), "4 2 3 1 \n")]
    #[case(Some(-1), Some(2), "1 2 3 4 \n")]
    fn test_sort(#[case] from: Option<isize>, #[case] to: Option<isize>, #[case] expected: &str) {
        let output = run_to_string(
            Commands::Sort(SortArgs {
                order: ascending(),
                from,
                to,
            }),
            "4 4 3 2 1",
        )
        .unwrap();
        assert_eq!(output, expected);
    }

    #[rstest]
    fn test_search_found_reorders() {
        let output = run_to_string(Commands::Search(SearchArgs { element: 2 }), "3 7 2 9").unwrap();
        assert_eq!(output, "0\n2 7 9 \n");
    }

    #[rstest]
    fn test_search_not_found() {
        let output =
            run_to_string(Commands::Search(SearchArgs { element: 5 }), "3 9 4 1").unwrap();
        assert_eq!(output, "not found\n9 4 1 \n");
    }

    #[rstest]
    #[case("3 1 2 3", "ascending\n")]
    #[case("3 3 2 1", "descending\n")]
    #[case("3 1 3 2", "unsorted\n")]
    #[case("1 5", "unsorted\n")]
    fn test_state(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(run_to_string(Commands::State, input).unwrap(), expected);
    }

    #[rstest]
    fn test_read_failure_has_context() {
        let error = run_to_string(Commands::State, "-1").unwrap_err();
        assert_eq!(error.to_string(), "failed to read input sequence");
        assert_eq!(
            error.root_cause().to_string(),
            "cannot resize sequence to negative length -1"
        );
    }
}

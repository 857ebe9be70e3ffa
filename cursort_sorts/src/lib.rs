//! # Introduction
//!
//! Classic sorting algorithms written against cursors instead of slices, so the same code sorts a
//! `Vec`, a `VecDeque` or a linked list. Each algorithm states the weakest cursor it needs and the
//! compiler refuses sequences that cannot provide it.
//!
//! * [`capability`] names the cursor tiers.
//! * [`sequence`] defines the sequence traits and the stock sequences.
//! * [`navigation`] finds the end, the midpoint and their neighbours of a range in the cheapest way
//!   the sequence allows.
//! * [`orst`] holds the sorters and the partition primitives.
//! * [`catalog`] picks an algorithm and a sequence kind at run time.

pub mod capability;
pub mod catalog;
pub mod navigation;
pub mod orst;
pub mod sequence;

use std::collections::VecDeque;
use std::fmt::Display;

use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use colored::Colorize;
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};

use catalog::{sort_values, Algorithm, SequenceKind};
use navigation::Navigable;
use sequence::{collect_range, ForwardList, List};

/// Sort values from the command line with any algorithm on any sequence kind. Install the
/// `cursort` crate and run `cursort sorts` to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Sort the given values and print them.
    Sort {
        #[arg(short, long, value_enum, default_value_t = Algorithm::Quick)]
        algorithm: Algorithm,

        #[arg(short, long, value_enum, default_value_t = SequenceKind::Vec)]
        sequence: SequenceKind,

        /// Sort from largest to smallest.
        #[arg(short, long)]
        descending: bool,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Split the values into those less than, equal to and greater than a pivot.
    Partition {
        #[arg(short, long, allow_negative_numbers = true)]
        pivot: i64,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Show where the midpoint of `1..=n` lands for every sequence kind.
    Midpoint {
        #[arg(long, num_args = 1.., default_values_t = [0, 1, 2, 3, 4, 10, 11, 12])]
        sizes: Vec<usize>,
    },

    /// Sort one random list with every algorithm.
    Demo {
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Count comparisons and time every sorter on every sequence kind.
    Bench {
        #[arg(long, default_value_t = 10_000)]
        max_size: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Sort {
                algorithm,
                sequence,
                descending,
                values,
            } => {
                if !sequence.supports(algorithm) {
                    bail!(
                        "{algorithm} needs a {} sequence, {sequence} is only {}",
                        algorithm.required_tier(),
                        sequence.capabilities()
                    );
                }

                let sorted = if descending {
                    sort_values(algorithm, sequence, values, |a, b| a > b)
                } else {
                    sort_values(algorithm, sequence, values, |a, b| a < b)
                }
                .with_context(|| format!("sorting a {sequence} with {algorithm}"))?;

                println!("{}", join(&sorted));
            }

            SortCommands::Partition { pivot, mut values } => {
                let (lo, hi) = orst::three_way_partition(&mut values, &pivot);
                print_partition(&values, lo, hi);
            }

            SortCommands::Midpoint { sizes } => {
                for n in sizes {
                    println!(
                        "{} {}",
                        "Range Size -> ".bold().underline().blue(),
                        n.to_string().bold()
                    );

                    let mut table = Table::new();
                    table.add_row(row![
                        "Sequence".bold(),
                        "Capabilities".bold(),
                        "Before Midpoint".bold(),
                        "Midpoint".bold(),
                        "After Midpoint".bold(),
                        "One Before Midpoint".bold()
                    ]);

                    let values = (1..=n).collect::<Vec<_>>();
                    table.add_row(midpoint_row(SequenceKind::Vec, &values));
                    table.add_row(midpoint_row(
                        SequenceKind::Deque,
                        &values.iter().copied().collect::<VecDeque<_>>(),
                    ));
                    table.add_row(midpoint_row(
                        SequenceKind::List,
                        &values.iter().copied().collect::<List<_>>(),
                    ));
                    table.add_row(midpoint_row(
                        SequenceKind::ForwardList,
                        &values.iter().copied().collect::<ForwardList<_>>(),
                    ));

                    table.printstd();
                    println!();
                }
            }

            SortCommands::Demo { count, seed } => {
                let mut random = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(rand::thread_rng())
                        .context("seeding the random number generator")?,
                };
                let values: Vec<i64> = (0..count).map(|_| random.gen_range(0..=1000)).collect();
                println!("{}", join(&values));

                for algorithm in Algorithm::ALL {
                    let sorted = sort_values(algorithm, SequenceKind::Vec, values.clone(), |a, b| {
                        a < b
                    })?;
                    println!("{} {}", format!("{algorithm}:").bold(), join(&sorted));
                }

                let mut fixed = vec![1, 5, 8, 16, 32, 32, 59, 100];
                let (lo, hi) = orst::three_way_partition(&mut fixed, &32);
                print_partition(&fixed, lo, hi);
            }

            SortCommands::Bench { max_size, seed } => orst::benchmark::run_orst(max_size, seed)?,
        }

        Ok(())
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_partition<T: Display>(values: &[T], lo: usize, hi: usize) {
    println!("{} {}", "less:   ".bold().green(), join(&values[..lo]));
    println!("{} {}", "equal:  ".bold().yellow(), join(&values[lo..hi]));
    println!("{} {}", "greater:".bold().red(), join(&values[hi..]));
}

fn midpoint_row<S>(kind: SequenceKind, seq: &S) -> prettytable::Row
where
    S: Navigable + ?Sized,
    S::Item: Clone + Display,
{
    let (first, last) = (seq.begin(), seq.end());
    let mid = seq.midpoint(first, last);

    let (at, after) = if mid == last {
        ("-".to_string(), String::new())
    } else {
        (
            seq.at(mid).to_string(),
            join(&collect_range(seq, seq.next(mid), last)),
        )
    };

    let before_mid = if first == last {
        "-".to_string()
    } else {
        seq.at(seq.one_before_midpoint(first, last)).to_string()
    };

    row![
        kind,
        kind.capabilities(),
        join(&collect_range(seq, first, mid)),
        at,
        after,
        before_mid
    ]
}

//! Comparison counts and wall time for every sorter on every sequence kind.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::catalog::{sort_values, Algorithm, SequenceKind, Unsupported};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

const SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, THOUSAND, TEN_THOUSAND, HUNDRED_THOUSAND];

/// The O(n²) sorters are skipped above this size.
const QUADRATIC_LIMIT: usize = TEN_THOUSAND;

const PROGRESS_TEMPLATE: &str = "{prefix:>10.cyan.bold} [{bar:40.blue}] {pos}/{len} {wide_msg}";

/// What a single sort run cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub comparisons: usize,
    pub elapsed: Duration,
    pub sorted: bool,
}

/// Sorts a copy of `values` and counts every call to the predicate.
pub fn measure(
    algorithm: Algorithm,
    kind: SequenceKind,
    values: &[i32],
) -> Result<Measurement, Unsupported> {
    let mut comparisons = 0;

    let now = Instant::now();
    let sorted = sort_values(algorithm, kind, values.to_vec(), |a, b| {
        comparisons += 1;
        a < b
    })?;
    let elapsed = now.elapsed();

    Ok(Measurement {
        comparisons,
        elapsed,
        sorted: sorted.windows(2).all(|w| w[0] <= w[1]),
    })
}

/// Runs every algorithm on every sequence kind for each size up to `max_size` and prints one table
/// per size. The same random input is used for all runs of one size.
pub fn run_orst(max_size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut random = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(rand::thread_rng())?,
    };
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("=> ");

    for n in SIZES.into_iter().filter(|&n| n <= max_size) {
        let values: Vec<i32> = (0..n).map(|_| random.gen()).collect();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Sequence".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold(),
            "Sorted".bold()
        ]);

        let runs = Algorithm::ALL.len() * SequenceKind::ALL.len();
        let progress = ProgressBar::new(runs as u64)
            .with_style(style.clone())
            .with_prefix(format!("n = {n}"));

        for algorithm in Algorithm::ALL {
            for kind in SequenceKind::ALL {
                progress.set_message(format!("{algorithm} on {kind}"));

                if !kind.supports(algorithm) {
                    table.add_row(row![
                        algorithm,
                        kind,
                        "Unsupported".yellow(),
                        format!("needs {}", algorithm.required_tier()),
                        ""
                    ]);
                } else if algorithm.is_quadratic() && n > QUADRATIC_LIMIT {
                    table.add_row(row![algorithm, kind, "Not Doing It".red(), "It is Stupid", ""]);
                } else {
                    let took = measure(algorithm, kind, &values)?;
                    let sorted = if took.sorted {
                        "yes".green()
                    } else {
                        "NO".red().bold()
                    };
                    table.add_row(row![
                        algorithm,
                        kind,
                        took.comparisons.to_string(),
                        format!("{:?}", took.elapsed),
                        sorted
                    ]);
                }

                progress.inc(1);
            }
        }

        progress.finish_and_clear();
        table.printstd();
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_comparisons() {
        let values = [5, 3, 8, 1, 9, 2];

        let took = measure(Algorithm::Bubble, SequenceKind::Vec, &values).unwrap();
        assert!(took.sorted);
        assert!(took.comparisons >= values.len() - 1);

        let sorted = [1, 2, 3, 4, 5, 6];
        let took = measure(Algorithm::Insertion, SequenceKind::List, &sorted).unwrap();
        assert_eq!(took.comparisons, sorted.len() - 1);
    }

    #[test]
    fn nothing_to_compare() {
        for algorithm in Algorithm::ALL {
            let took = measure(algorithm, SequenceKind::Deque, &[]).unwrap();
            assert_eq!(took.comparisons, 0);
            assert!(took.sorted);
        }
    }

    #[test]
    fn unsupported_pairs_are_reported() {
        let err = measure(Algorithm::Heap, SequenceKind::ForwardList, &[2, 1]).unwrap_err();
        assert_eq!(err.kind, SequenceKind::ForwardList);
    }

    #[test]
    fn small_seeded_run() {
        run_orst(HUNDRED, Some(42)).unwrap();
    }

    #[test]
    fn template_is_valid() {
        assert!(ProgressStyle::with_template(PROGRESS_TEMPLATE).is_ok());
    }
}

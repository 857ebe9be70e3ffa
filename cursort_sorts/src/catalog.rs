//! Picking an algorithm and a sequence kind at run time.
//!
//! The sorting API itself rejects unsupported pairings at compile time. Once the choice comes from
//! the command line that is no longer possible, so [`sort_values`] answers with [`Unsupported`]
//! instead.

use std::error::Error as StdError;
use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::capability::{Capabilities, Tier};
use crate::navigation::Navigable;
use crate::orst::{
    bubble_sort_by, heap_sort_by, insertion_sort_by, quick_sort_by, selection_sort_by,
    shell_sort_by, QuickSortVariant,
};
use crate::sequence::{
    BidirectionalSequence, ForwardList, ForwardSequence, List, RandomAccessSequence,
};

/// The sorting algorithms in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Heap,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Heap,
        Algorithm::Quick,
    ];

    /// The weakest cursor the algorithm works with.
    pub fn required_tier(self) -> Tier {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Quick => Tier::Forward,
            Algorithm::Insertion | Algorithm::Shell => Tier::Bidirectional,
            Algorithm::Heap => Tier::RandomAccess,
        }
    }

    /// O(n²) on every input that is not nearly sorted.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }

    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Quick => "Quick Sort",
        };
        write!(f, "{name}")
    }
}

/// The stock sequences values can be loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SequenceKind {
    /// `Vec<T>`, contiguous.
    Vec,
    /// `VecDeque<T>`, random access.
    Deque,
    /// Doubly linked [`List`], bidirectional.
    List,
    /// Singly linked [`ForwardList`], forward only.
    ForwardList,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 4] = [
        SequenceKind::Vec,
        SequenceKind::Deque,
        SequenceKind::List,
        SequenceKind::ForwardList,
    ];

    pub fn capabilities(self) -> Capabilities {
        match self {
            SequenceKind::Vec => Capabilities::of::<Vec<()>>(),
            SequenceKind::Deque => Capabilities::of::<std::collections::VecDeque<()>>(),
            SequenceKind::List => Capabilities::of::<List<()>>(),
            SequenceKind::ForwardList => Capabilities::of::<ForwardList<()>>(),
        }
    }

    pub fn supports(self, algorithm: Algorithm) -> bool {
        self.capabilities()
            .tier
            .satisfies(algorithm.required_tier())
    }
}

impl Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceKind::Vec => "Vec",
            SequenceKind::Deque => "VecDeque",
            SequenceKind::List => "List",
            SequenceKind::ForwardList => "ForwardList",
        };
        write!(f, "{name}")
    }
}

/// The algorithm needs a stronger cursor than the sequence kind offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    pub algorithm: Algorithm,
    pub kind: SequenceKind,
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} needs a {} sequence but {} is only {}",
            self.algorithm,
            self.algorithm.required_tier(),
            self.kind,
            self.kind.capabilities().tier
        )
    }
}

impl StdError for Unsupported {}

/// Loads `values` into a sequence of the given kind, sorts it and hands the values back in their
/// new order.
///
/// ```
/// use cursort_sorts::catalog::{sort_values, Algorithm, SequenceKind};
///
/// let sorted = sort_values(Algorithm::Shell, SequenceKind::List, vec![3, 1, 2], |a, b| a < b);
/// assert_eq!(sorted, Ok(vec![1, 2, 3]));
///
/// let err = sort_values(Algorithm::Heap, SequenceKind::ForwardList, vec![3, 1, 2], |a, b| a < b);
/// assert!(err.is_err());
/// ```
pub fn sort_values<T, F>(
    algorithm: Algorithm,
    kind: SequenceKind,
    values: Vec<T>,
    is_less: F,
) -> Result<Vec<T>, Unsupported>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let unsupported = Unsupported { algorithm, kind };

    match kind {
        SequenceKind::Vec => {
            let mut seq = values;
            sort_random_access(algorithm, &mut seq, is_less);
            Ok(seq)
        }
        SequenceKind::Deque => {
            let mut seq: std::collections::VecDeque<T> = values.into();
            sort_random_access(algorithm, &mut seq, is_less);
            Ok(seq.into())
        }
        SequenceKind::List => {
            let mut seq: List<T> = values.into_iter().collect();
            sort_bidirectional(algorithm, &mut seq, is_less).ok_or(unsupported)?;
            Ok(seq.to_vec())
        }
        SequenceKind::ForwardList => {
            let mut seq: ForwardList<T> = values.into_iter().collect();
            sort_forward(algorithm, &mut seq, is_less).ok_or(unsupported)?;
            Ok(seq.to_vec())
        }
    }
}

fn sort_random_access<S, F>(algorithm: Algorithm, seq: &mut S, is_less: F)
where
    S: RandomAccessSequence + Navigable + ?Sized,
    S::Category: QuickSortVariant<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    match algorithm {
        Algorithm::Heap => heap_sort_by(seq, is_less),
        _ => {
            // Everything else is handled the same way for any bidirectional sequence.
            let _ = sort_bidirectional(algorithm, seq, is_less);
        }
    }
}

fn sort_bidirectional<S, F>(algorithm: Algorithm, seq: &mut S, is_less: F) -> Option<()>
where
    S: BidirectionalSequence + Navigable + ?Sized,
    S::Category: QuickSortVariant<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    match algorithm {
        Algorithm::Insertion => insertion_sort_by(seq, is_less),
        Algorithm::Shell => shell_sort_by(seq, is_less),
        Algorithm::Heap => return None,
        _ => return sort_forward(algorithm, seq, is_less),
    }
    Some(())
}

fn sort_forward<S, F>(algorithm: Algorithm, seq: &mut S, is_less: F) -> Option<()>
where
    S: ForwardSequence + ?Sized,
    S::Category: QuickSortVariant<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    match algorithm {
        Algorithm::Bubble => bubble_sort_by(seq, is_less),
        Algorithm::Selection => selection_sort_by(seq, is_less),
        Algorithm::Quick => quick_sort_by(seq, is_less),
        Algorithm::Insertion | Algorithm::Shell | Algorithm::Heap => return None,
    }
    Some(())
}

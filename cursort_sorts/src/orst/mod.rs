//! Implementation of sorting algorithms over any [`ForwardSequence`], growing out of [Crust of
//! Rust: Sorting Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM) but no longer tied to
//! slices.
//!
//! Every algorithm comes in three shapes:
//!
//! * `x_sort(seq)` sorts the whole sequence in ascending [`Ord`] order,
//! * `x_sort_by(seq, is_less)` takes a strict weak ordering as an "is less" predicate,
//! * `x_sort_range_by(seq, first, last, is_less)` sorts only `[first, last)`,
//!
//! and as a unit struct implementing [`Sorter`] for whatever sequences it supports:
//!
//! | Sorter              | Needs                       | Stable |
//! |---------------------|-----------------------------|--------|
//! | [`BubbleSorter`]    | [`ForwardSequence`]         | yes    |
//! | [`SelectionSorter`] | [`ForwardSequence`]         | no     |
//! | [`InsertionSorter`] | [`BidirectionalSequence`]   | yes    |
//! | [`ShellSorter`]     | [`BidirectionalSequence`]   | no     |
//! | [`HeapSorter`]      | [`RandomAccessSequence`]    | no     |
//! | [`QuickSorter`]     | [`ForwardSequence`]         | no     |
//!
//! [`BidirectionalSequence`]: crate::sequence::BidirectionalSequence
//! [`RandomAccessSequence`]: crate::sequence::RandomAccessSequence
//!
//! # Example
//!
//! ```
//! use cursort_sorts::orst::{BubbleSorter, Sorter};
//! use cursort_sorts::sequence::ForwardList;
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! let mut list: ForwardList<_> = [1, 3, 2, 5, 4].into_iter().collect();
//! BubbleSorter.sort_by(&mut list, |a, b| a > b);
//! assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
//! ```

pub mod benchmark;
mod partition;
mod sorters;

pub use partition::{
    partition, three_way_partition, three_way_partition_by, three_way_partition_range_by,
};
pub use sorters::bubble_sorter::{bubble_sort, bubble_sort_by, bubble_sort_range_by, BubbleSorter};
pub use sorters::heap_sorter::{heap_sort, heap_sort_by, heap_sort_range_by, HeapSorter};
pub use sorters::insertion_sorter::{
    insertion_sort, insertion_sort_by, insertion_sort_range_by, InsertionSorter,
};
pub use sorters::quick_sorter::{
    quick_sort, quick_sort_bidirectional_range_by, quick_sort_by, quick_sort_forward_range_by,
    quick_sort_range_by, QuickSortVariant, QuickSorter,
};
pub use sorters::selection_sorter::{
    selection_sort, selection_sort_by, selection_sort_range_by, SelectionSorter,
};
pub use sorters::shell_sorter::{shell_sort, shell_sort_by, shell_sort_range_by, ShellSorter, GAPS};

use crate::sequence::ForwardSequence;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// A sorter only implements `Sorter<S>` for the sequences it can handle, so the capability check
/// happens when the call is type checked.
pub trait Sorter<S>
where
    S: ForwardSequence + ?Sized,
{
    /// Sorts `[first, last)` of `seq` so that no element is less than the one before it.
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;

    fn sort_by<F>(&self, seq: &mut S, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        let (first, last) = (seq.begin(), seq.end());
        self.sort_range_by(seq, first, last, is_less)
    }

    fn sort(&self, seq: &mut S)
    where
        S::Item: Ord,
    {
        self.sort_by(seq, |a, b| a < b)
    }
}

/// Lets a sequence pick its sorter in method position.
///
/// ```
/// use cursort_sorts::orst::{HeapSorter, SortExt};
///
/// let mut v = vec![3, 1, 2];
/// v.orst(HeapSorter);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub trait SortExt: ForwardSequence {
    fn orst<S>(&mut self, sorter: S)
    where
        S: Sorter<Self>,
        Self::Item: Ord,
    {
        sorter.sort(self)
    }

    fn orst_by<S, F>(&mut self, sorter: S, is_less: F)
    where
        S: Sorter<Self>,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        sorter.sort_by(self, is_less)
    }
}

impl<T> SortExt for T where T: ForwardSequence + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::List;

    #[test]
    fn ext_methods() {
        let mut list: List<_> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        list.orst(ShellSorter);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 8, 9]);

        list.orst_by(InsertionSorter, |a, b| b < a);
        assert_eq!(list.to_vec(), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn sorter_on_a_sub_range() {
        let mut v = vec![9, 4, 3, 2, 1, 0];
        QuickSorter.sort_range_by(&mut v, 1, 5, |a, b| a < b);
        assert_eq!(v, vec![9, 1, 2, 3, 4, 0]);
    }
}

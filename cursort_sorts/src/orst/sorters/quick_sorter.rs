use crate::capability::{Bidirectional, Contiguous, Forward, RandomAccess};
use crate::navigation::{is_size_zero_or_one, Navigable};
use crate::orst::{insertion_sort_range_by, partition, Sorter};
use crate::sequence::{BidirectionalSequence, ForwardSequence};

/// Ranges of at most this many elements are finished off with insertion sort, when their size is
/// known without walking them.
const INSERTION_THRESHOLD: usize = 10;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use cursort_sorts::orst::{QuickSorter, Sorter};
/// use cursort_sorts::sequence::ForwardList;
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut list: ForwardList<_> = [1, 5, 4, 2, 3].into_iter().collect();
/// QuickSorter.sort(&mut list);
/// assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot.
///
/// Two variants exist and the sequence's capability picks one, see [`QuickSortVariant`]:
///
/// * forward-only sequences use [`quick_sort_forward_range_by`],
/// * everything that can step back uses [`quick_sort_bidirectional_range_by`].
///
/// Neither recurses. Sub-ranges still waiting to be sorted are kept on an explicit stack, so
/// adversarial input costs time but cannot overflow the call stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl<S> Sorter<S> for QuickSorter
where
    S: ForwardSequence + ?Sized,
    S::Category: QuickSortVariant<S>,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quick_sort_range_by(seq, first, last, is_less)
    }
}

/// Picks the quick sort variant for a capability marker.
pub trait QuickSortVariant<S>
where
    S: ForwardSequence + ?Sized,
{
    fn sort_range_by<F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;
}

impl<S> QuickSortVariant<S> for Forward
where
    S: Navigable + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quick_sort_forward_range_by(seq, first, last, is_less)
    }
}

impl<S> QuickSortVariant<S> for Bidirectional
where
    S: BidirectionalSequence + Navigable + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quick_sort_bidirectional_range_by(seq, first, last, is_less)
    }
}

impl<S> QuickSortVariant<S> for RandomAccess
where
    S: BidirectionalSequence + Navigable + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quick_sort_bidirectional_range_by(seq, first, last, is_less)
    }
}

impl<S> QuickSortVariant<S> for Contiguous
where
    S: BidirectionalSequence + Navigable + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quick_sort_bidirectional_range_by(seq, first, last, is_less)
    }
}

pub fn quick_sort<S>(seq: &mut S)
where
    S: ForwardSequence + ?Sized,
    S::Category: QuickSortVariant<S>,
    S::Item: Ord,
{
    quick_sort_by(seq, |a, b| a < b)
}

pub fn quick_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: ForwardSequence + ?Sized,
    S::Category: QuickSortVariant<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    quick_sort_range_by(seq, first, last, is_less)
}

pub fn quick_sort_range_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
where
    S: ForwardSequence + ?Sized,
    S::Category: QuickSortVariant<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    <S::Category as QuickSortVariant<S>>::sort_range_by(seq, first, last, is_less)
}

/// Quick sort using only forward steps.
///
/// The pivot slot is the last element of the range. The middle element is swapped into that slot
/// first, which keeps already sorted input from degenerating. `[first, pivot)` is then
/// partitioned on "less than the pivot" and the pivot is swapped onto the boundary, where it
/// stays.
pub fn quick_sort_forward_range_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut is_less: F,
) where
    S: Navigable + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut pending = vec![(first, last)];

    while let Some((first, last)) = pending.pop() {
        if is_size_zero_or_one(seq, first, last) {
            continue;
        }

        let pivot = seq.one_before_end(first, last);
        let mid = seq.midpoint(first, last);
        if pivot != mid {
            seq.swap(pivot, mid);
        }

        let boundary = partition(seq, first, pivot, pivot, &mut is_less);
        if boundary != pivot {
            seq.swap(pivot, boundary);
        }

        pending.push((first, boundary));
        pending.push((seq.next(boundary), last));
    }
}

/// Quick sort for sequences that can step back.
///
/// The middle element is the pivot and is parked at `first` while `(first, last)` is
/// partitioned. It is then swapped onto the last slot of the "less" side, one before the
/// boundary, and left out of both halves.
pub fn quick_sort_bidirectional_range_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut is_less: F,
) where
    S: BidirectionalSequence + Navigable + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut pending = vec![(first, last)];

    while let Some((first, last)) = pending.pop() {
        if is_size_zero_or_one(seq, first, last) {
            continue;
        }
        if let Some(len) = seq.sized_distance(first, last) {
            if len <= INSERTION_THRESHOLD {
                insertion_sort_range_by(seq, first, last, &mut is_less);
                continue;
            }
        }

        let mid = seq.midpoint(first, last);
        if mid != first {
            seq.swap(first, mid);
        }

        let rest = seq.next(first);
        let boundary = partition(seq, rest, last, first, &mut is_less);
        let pivot = seq.prev(boundary);
        if pivot != first {
            seq.swap(first, pivot);
        }

        let (left, right) = ((first, pivot), (boundary, last));
        // Popping the smaller side first keeps the stack logarithmic when sizes are known.
        match (
            seq.sized_distance(left.0, left.1),
            seq.sized_distance(right.0, right.1),
        ) {
            (Some(l), Some(r)) if l < r => {
                pending.push(right);
                pending.push(left);
            }
            _ => {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sequence::{ForwardList, List};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_lists() {
        let mut list = (1..1000).rev().collect::<ForwardList<_>>();
        QuickSorter.sort(&mut list);
        assert_eq!(list.to_vec(), (1..1000).collect::<Vec<_>>());

        let mut list = (1..1000).rev().collect::<List<_>>();
        QuickSorter.sort(&mut list);
        assert_eq!(list.to_vec(), (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn forward_variant_on_a_slice() {
        let mut slice = vec![5, 3, 8, 1, 9, 2, 7, 7, 0];
        let (first, last) = (0, slice.len());
        quick_sort_forward_range_by(&mut slice, first, last, |a, b| a < b);
        assert_eq!(slice, vec![0, 1, 2, 3, 5, 7, 7, 8, 9]);
    }

    #[test]
    fn many_duplicates() {
        let mut slice = (0..500).map(|i| i % 3).collect::<Vec<_>>();
        quick_sort(&mut slice);
        assert!(slice.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(slice.iter().filter(|&&x| x == 0).count(), 167);

        let mut list = [2, 2, 2, 2].into_iter().collect::<ForwardList<_>>();
        quick_sort(&mut list);
        assert_eq!(list.to_vec(), vec![2, 2, 2, 2]);
    }

    #[test]
    fn descending_with_comparator() {
        let mut list = [5, 3, 8, 1, 9, 2].into_iter().collect::<List<_>>();
        quick_sort_by(&mut list, |a, b| a > b);
        assert_eq!(list.to_vec(), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut none: Vec<i32> = vec![];
        QuickSorter.sort(&mut none);
        assert!(none.is_empty());

        let mut one = vec![1];
        QuickSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        QuickSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

use crate::orst::Sorter;
use crate::sequence::ForwardSequence;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use cursort_sorts::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. Initially, the sorted sublist is
/// empty and the unsorted sublist is the entire input
/// list. The algorithm proceeds by finding the smallest
/// (or largest, depending on sorting order)
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<S> Sorter<S> for SelectionSorter
where
    S: ForwardSequence + ?Sized,
{
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        selection_sort_range_by(seq, first, last, is_less)
    }
}

pub fn selection_sort<S>(seq: &mut S)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    selection_sort_by(seq, |a, b| a < b)
}

pub fn selection_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    selection_sort_range_by(seq, first, last, is_less)
}

pub fn selection_sort_range_by<S, F>(
    seq: &mut S,
    mut unsorted: S::Cursor,
    last: S::Cursor,
    mut is_less: F,
) where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while unsorted != last {
        let mut smallest_in_rest = unsorted;
        let mut i = seq.next(unsorted);
        while i != last {
            if is_less(seq.at(i), seq.at(smallest_in_rest)) {
                smallest_in_rest = i;
            }
            i = seq.next(i);
        }
        if unsorted != smallest_in_rest {
            seq.swap(unsorted, smallest_in_rest);
        }
        unsorted = seq.next(unsorted);
    }
}

use crate::navigation::is_size_zero_or_one;
use crate::orst::Sorter;
use crate::sequence::ForwardSequence;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use cursort_sorts::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// Only adjacent pairs are ever looked at, so a forward-only cursor is enough. Equal elements are
/// never swapped, which keeps the sort stable.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![1, 3, 2, 5, 4];
///
/// let mut swapped = true;
///
///     while swapped {
///         swapped = false;
///         for i in 1..slice.len() {
///         // swap the elements at index if the previous element is
///         // bigger that the current element.
///             if slice[i] < slice[i - 1] {
///                 slice.swap(i - 1, i);
///                 swapped = true;
///             }
///         }
///     }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<S> Sorter<S> for BubbleSorter
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        bubble_sort_range_by(seq, first, last, is_less)
    }
}

pub fn bubble_sort<S>(seq: &mut S)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    bubble_sort_by(seq, |a, b| a < b)
}

pub fn bubble_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    bubble_sort_range_by(seq, first, last, is_less)
}

pub fn bubble_sort_range_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut is_less: F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if is_size_zero_or_one(seq, first, last) {
        return;
    }

    let mut swapped = true;

    while swapped {
        swapped = false;
        let mut prev = first;
        let mut i = seq.next(first);
        while i != last {
            if is_less(seq.at(i), seq.at(prev)) {
                seq.swap(prev, i);
                swapped = true;
            }
            prev = i;
            i = seq.next(i);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sequence::ForwardList;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn forward_list() {
        let mut list = [5, 3, 8, 1, 9, 2].into_iter().collect::<ForwardList<_>>();
        bubble_sort(&mut list);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        bubble_sort_by(&mut pairs, |a, b| a.0 < b.0);
        assert_eq!(pairs, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut none: Vec<i32> = vec![];
        BubbleSorter.sort(&mut none);
        assert!(none.is_empty());

        let mut one = vec![1];
        BubbleSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        BubbleSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

use crate::orst::Sorter;
use crate::sequence::BidirectionalSequence;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Here the new element is walked backwards one swap at a time for as long as its predecessor
/// compares greater, so the cursor has to be able to step back. An element never passes an equal
/// one, which makes the sort stable.
///
/// # Usage
///```
/// use cursort_sorts::orst::{InsertionSorter, Sorter};
/// use cursort_sorts::sequence::List;
///
/// let mut list: List<_> = [1, 5, 4, 2, 3].into_iter().collect();
/// InsertionSorter.sort(&mut list);
/// assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl<S> Sorter<S> for InsertionSorter
where
    S: BidirectionalSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        insertion_sort_range_by(seq, first, last, is_less)
    }
}

pub fn insertion_sort<S>(seq: &mut S)
where
    S: BidirectionalSequence + ?Sized,
    S::Item: Ord,
{
    insertion_sort_by(seq, |a, b| a < b)
}

pub fn insertion_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    insertion_sort_range_by(seq, first, last, is_less)
}

pub fn insertion_sort_range_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut is_less: F,
) where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return;
    }

    let mut unsorted = seq.next(first);
    while unsorted != last {
        let mut i = unsorted;
        while i != first {
            let prev = seq.prev(i);
            if !is_less(seq.at(i), seq.at(prev)) {
                break;
            }
            seq.swap(prev, i);
            i = prev;
        }
        unsorted = seq.next(unsorted);
    }
}

use crate::orst::Sorter;
use crate::sequence::RandomAccessSequence;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use cursort_sorts::orst::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// Heap sort needs to jump from a node to its children, so it is only available for random access
/// sequences. This does not compile:
///
///```compile_fail
/// use cursort_sorts::orst::{HeapSorter, Sorter};
/// use cursort_sorts::sequence::List;
///
/// let mut list: List<_> = [1, 5, 4, 2, 3].into_iter().collect();
/// HeapSorter.sort(&mut list);
///```
///
/// # Algorithm
///
/// The range is first rearranged into a binary max-heap laid out implicitly, with the children of
/// index `i` at `2i + 1` and `2i + 2`. The root is then repeatedly swapped with the last element of
/// the heap, the heap shrinks by one and the new root is sifted down.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

impl<S> Sorter<S> for HeapSorter
where
    S: RandomAccessSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heap_sort_range_by(seq, first, last, is_less)
    }
}

pub fn heap_sort<S>(seq: &mut S)
where
    S: RandomAccessSequence + ?Sized,
    S::Item: Ord,
{
    heap_sort_by(seq, |a, b| a < b)
}

pub fn heap_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    heap_sort_range_by(seq, first, last, is_less)
}

pub fn heap_sort_range_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut is_less: F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(first, last);
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(seq, first, node, len, &mut is_less);
    }

    for end in (1..len).rev() {
        seq.swap(first, nth(seq, first, end));
        sift_down(seq, first, 0, end, &mut is_less);
    }
}

#[inline]
fn nth<S>(seq: &S, first: S::Cursor, index: usize) -> S::Cursor
where
    S: RandomAccessSequence + ?Sized,
{
    seq.jump(first, index as isize)
}

// Restores the heap property below `node` for a heap of `len` elements starting at `first`.
fn sift_down<S, F>(seq: &mut S, first: S::Cursor, mut node: usize, len: usize, is_less: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        if child + 1 < len
            && is_less(
                seq.at(nth(seq, first, child)),
                seq.at(nth(seq, first, child + 1)),
            )
        {
            child += 1;
        }

        let (node_at, child_at) = (nth(seq, first, node), nth(seq, first, child));
        if !is_less(seq.at(node_at), seq.at(child_at)) {
            break;
        }

        seq.swap(node_at, child_at);
        node = child;
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn honours_the_comparator() {
        let mut deque: VecDeque<_> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        heap_sort_by(&mut deque, |a, b| a > b);
        assert_eq!(deque, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn duplicates() {
        let mut slice = vec![3, 1, 3, 1, 2, 2, 3];
        heap_sort(&mut slice);
        assert_eq!(slice, vec![1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn inner_range() {
        let mut slice = vec![7, 6, 5, 4, 3, 2, 1];
        heap_sort_range_by(&mut slice, 2, 6, |a, b| a < b);
        assert_eq!(slice, vec![7, 6, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut none: Vec<i32> = vec![];
        HeapSorter.sort(&mut none);
        assert!(none.is_empty());

        let mut one = vec![1];
        HeapSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        HeapSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}

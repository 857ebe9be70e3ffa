//! Finding positions inside a half open range `[first, last)`.
//!
//! Each operation has up to three strategies and the cheapest one the sequence supports is picked
//! at compile time through its [`Category`](crate::capability::Category):
//!
//! * random access: plain arithmetic on the distance,
//! * sized (any tier): jump forward by a count computed from
//!   [`sized_distance`](ForwardSequence::sized_distance),
//! * bidirectional: step back once from `last` where that is what is asked for,
//! * forward: walk. The midpoint walks use a slow and a fast cursor so the length never has to
//!   be computed first, which would cost a full extra pass on a linked list.
//!
//! All of it is reached through the [`Navigable`] trait, which every stock sequence implements.
//!
//! ```
//! use cursort_sorts::navigation::Navigable;
//! use cursort_sorts::sequence::{ForwardList, ForwardSequence};
//!
//! let list: ForwardList<_> = (1..=5).collect();
//! let (first, last) = (list.begin(), list.end());
//!
//! assert_eq!(*list.at(list.midpoint(first, last)), 3);
//! assert_eq!(*list.at(list.one_before_end(first, last)), 5);
//! ```

use crate::capability::{Bidirectional, Contiguous, Forward, RandomAccess};
use crate::sequence::{BidirectionalSequence, ForwardSequence, RandomAccessSequence};

/// One navigation strategy per capability marker.
///
/// This is implemented for the markers in [`capability`](crate::capability), never for
/// sequences. Use [`Navigable`] instead of calling it directly.
pub trait Navigator<S>
where
    S: ForwardSequence + ?Sized,
{
    fn one_before_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor;

    fn position_at_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor;

    fn midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor;

    fn one_before_midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor;
}

/// Position lookups over `[first, last)`. Implemented for every sequence whose category has a
/// [`Navigator`].
pub trait Navigable: ForwardSequence {
    /// The last element of the range, or `first` if the range is empty.
    fn one_before_end(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor;

    /// The cursor equal to `last`, reached from `first`.
    fn position_at_end(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor;

    /// The element at index `n / 2` of an `n` element range, or `last` if the range is empty.
    fn midpoint(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor;

    /// The last element of the front half when the range is split into a front half of
    /// `ceil(n / 2)` elements and a back half of `floor(n / 2)` elements, i.e. index
    /// `ceil(n / 2) - 1`. Returns `first` for an empty range.
    ///
    /// For an even `n` this is the element right before [`midpoint`](Navigable::midpoint).
    fn one_before_midpoint(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor;
}

impl<S> Navigable for S
where
    S: ForwardSequence + ?Sized,
    S::Category: Navigator<S>,
{
    #[inline]
    fn one_before_end(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor {
        <S::Category as Navigator<S>>::one_before_end(self, first, last)
    }

    #[inline]
    fn position_at_end(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor {
        <S::Category as Navigator<S>>::position_at_end(self, first, last)
    }

    #[inline]
    fn midpoint(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor {
        <S::Category as Navigator<S>>::midpoint(self, first, last)
    }

    #[inline]
    fn one_before_midpoint(&self, first: Self::Cursor, last: Self::Cursor) -> Self::Cursor {
        <S::Category as Navigator<S>>::one_before_midpoint(self, first, last)
    }
}

/// `true` if `[first, last)` has fewer than two elements.
///
/// ```
/// use cursort_sorts::navigation::is_size_zero_or_one;
///
/// let v = vec![1, 2];
/// assert!(is_size_zero_or_one(&v, 0, 0));
/// assert!(is_size_zero_or_one(&v, 0, 1));
/// assert!(!is_size_zero_or_one(&v, 0, 2));
/// ```
#[inline]
pub fn is_size_zero_or_one<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> bool
where
    S: ForwardSequence + ?Sized,
{
    first == last || seq.next(first) == last
}

fn walk_one_before_end<S>(seq: &S, mut first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
{
    let mut prev = first;
    while first != last {
        prev = first;
        first = seq.next(first);
    }
    prev
}

// Both midpoint walks move `fast` two steps for every step of `slow`.

fn walk_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
{
    let mut slow = first;
    let mut fast = first;
    if fast != last {
        fast = seq.next(fast);
        while fast != last {
            slow = seq.next(slow);
            fast = seq.next(fast);
            if fast == last {
                break;
            }
            fast = seq.next(fast);
        }
    }
    slow
}

fn walk_one_before_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
{
    let mut slow = first;
    let mut fast = seq.advance_by(first, 1, last);
    if fast != last {
        fast = seq.next(fast);
        while fast != last {
            slow = seq.next(slow);
            fast = seq.next(fast);
            if fast == last {
                break;
            }
            fast = seq.next(fast);
        }
    }
    slow
}

// Index of the element returned by `one_before_midpoint` in a non-empty range of `len` elements.
#[inline]
fn before_midpoint_index(len: usize) -> usize {
    // `len / 2 + len % 2` is `ceil(len / 2)` without overflowing on `usize::MAX`.
    len / 2 + len % 2 - 1
}

fn forward_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
{
    match seq.sized_distance(first, last) {
        Some(len) => seq.advance_by(first, len / 2, last),
        None => walk_midpoint(seq, first, last),
    }
}

fn forward_one_before_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
{
    match seq.sized_distance(first, last) {
        Some(0) => first,
        Some(len) => seq.advance_by(first, before_midpoint_index(len), last),
        None => walk_one_before_midpoint(seq, first, last),
    }
}

impl<S> Navigator<S> for Forward
where
    S: ForwardSequence + ?Sized,
{
    fn one_before_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        match seq.sized_distance(first, last) {
            Some(0) => first,
            Some(len) => seq.advance_by(first, len - 1, last),
            None => walk_one_before_end(seq, first, last),
        }
    }

    fn position_at_end(seq: &S, mut first: S::Cursor, last: S::Cursor) -> S::Cursor {
        if let Some(len) = seq.sized_distance(first, last) {
            return seq.advance_by(first, len, last);
        }
        while first != last {
            first = seq.next(first);
        }
        first
    }

    fn midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        forward_midpoint(seq, first, last)
    }

    fn one_before_midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        forward_one_before_midpoint(seq, first, last)
    }
}

impl<S> Navigator<S> for Bidirectional
where
    S: BidirectionalSequence + ?Sized,
{
    fn one_before_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        if first == last {
            first
        } else {
            seq.prev(last)
        }
    }

    fn position_at_end(_seq: &S, _first: S::Cursor, last: S::Cursor) -> S::Cursor {
        last
    }

    fn midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        forward_midpoint(seq, first, last)
    }

    fn one_before_midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        forward_one_before_midpoint(seq, first, last)
    }
}

fn random_access_one_before_end<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: RandomAccessSequence + ?Sized,
{
    if first == last {
        first
    } else {
        seq.prev(last)
    }
}

fn random_access_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: RandomAccessSequence + ?Sized,
{
    seq.jump(first, (seq.distance(first, last) / 2) as isize)
}

fn random_access_one_before_midpoint<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: RandomAccessSequence + ?Sized,
{
    match seq.distance(first, last) {
        0 => first,
        len => seq.jump(first, before_midpoint_index(len) as isize),
    }
}

impl<S> Navigator<S> for RandomAccess
where
    S: RandomAccessSequence + ?Sized,
{
    fn one_before_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_one_before_end(seq, first, last)
    }

    fn position_at_end(_seq: &S, _first: S::Cursor, last: S::Cursor) -> S::Cursor {
        last
    }

    fn midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_midpoint(seq, first, last)
    }

    fn one_before_midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_one_before_midpoint(seq, first, last)
    }
}

impl<S> Navigator<S> for Contiguous
where
    S: RandomAccessSequence + ?Sized,
{
    fn one_before_end(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_one_before_end(seq, first, last)
    }

    fn position_at_end(_seq: &S, _first: S::Cursor, last: S::Cursor) -> S::Cursor {
        last
    }

    fn midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_midpoint(seq, first, last)
    }

    fn one_before_midpoint(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor {
        random_access_one_before_midpoint(seq, first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability;
    use crate::sequence::{ForwardList, List};
    use std::collections::VecDeque;

    /// Forward-only cursors over a vector that still know their distance.
    struct SizedForward(Vec<usize>);

    impl ForwardSequence for SizedForward {
        type Item = usize;
        type Cursor = usize;
        type Category = capability::Forward;

        const SIZED: bool = true;

        fn begin(&self) -> usize {
            0
        }

        fn end(&self) -> usize {
            self.0.len()
        }

        fn next(&self, cursor: usize) -> usize {
            cursor + 1
        }

        fn at(&self, cursor: usize) -> &usize {
            &self.0[cursor]
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.0.swap(a, b)
        }

        fn sized_distance(&self, first: usize, last: usize) -> Option<usize> {
            Some(last - first)
        }
    }

    // Every sequence holds `0..n`, so the element under a cursor is its index.
    fn positions<S>(seq: &S) -> [Option<usize>; 4]
    where
        S: Navigable<Item = usize> + ?Sized,
    {
        let (first, last) = (seq.begin(), seq.end());
        let value = |cursor| (cursor != last).then(|| *seq.at(cursor));
        [
            value(seq.one_before_end(first, last)),
            value(seq.position_at_end(first, last)),
            value(seq.midpoint(first, last)),
            value(seq.one_before_midpoint(first, last)),
        ]
    }

    fn expected(n: usize) -> [Option<usize>; 4] {
        if n == 0 {
            return [None; 4];
        }
        [Some(n - 1), None, Some(n / 2), Some((n + 1) / 2 - 1)]
    }

    #[test]
    fn every_strategy_agrees() {
        for n in [0, 1, 2, 3, 4, 5, 10, 11, 12] {
            let items: Vec<usize> = (0..n).collect();

            assert_eq!(positions(&items), expected(n), "vec of {n}");
            assert_eq!(positions(&items[..]), expected(n), "slice of {n}");
            assert_eq!(
                positions(&items.iter().copied().collect::<VecDeque<_>>()),
                expected(n),
                "deque of {n}"
            );
            assert_eq!(
                positions(&items.iter().copied().collect::<List<_>>()),
                expected(n),
                "list of {n}"
            );
            assert_eq!(
                positions(&items.iter().copied().collect::<ForwardList<_>>()),
                expected(n),
                "forward list of {n}"
            );
            assert_eq!(
                positions(&SizedForward(items.clone())),
                expected(n),
                "sized forward of {n}"
            );
        }
    }

    #[test]
    fn sub_ranges() {
        let list: ForwardList<usize> = (0..10).collect();
        let first = list.advance_by(list.begin(), 2, list.end());
        let last = list.advance_by(first, 5, list.end());

        assert_eq!(*list.at(list.midpoint(first, last)), 4);
        assert_eq!(*list.at(list.one_before_midpoint(first, last)), 4);
        assert_eq!(*list.at(list.one_before_end(first, last)), 6);
        assert_eq!(list.position_at_end(first, last), last);
    }

    #[test]
    fn one_before_midpoint_of_two_is_first() {
        let v = vec![7, 8];
        assert_eq!(v.one_before_midpoint(0, 2), 0);
        assert_eq!(v.midpoint(0, 2), 1);
    }

    #[test]
    fn size_zero_or_one() {
        let list: ForwardList<_> = [1, 2, 3].into_iter().collect();
        let first = list.begin();
        assert!(is_size_zero_or_one(&list, first, first));
        assert!(is_size_zero_or_one(&list, first, list.next(first)));
        assert!(!is_size_zero_or_one(&list, first, list.end()));
    }
}

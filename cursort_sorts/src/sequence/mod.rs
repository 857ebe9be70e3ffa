//! The sequence/cursor model every algorithm in this crate is written against.
//!
//! A sequence hands out [`Copy`] cursors and is asked to read or swap the elements under them.
//! Cursors never borrow the sequence, which is what lets an algorithm hold on to several
//! positions at once while it keeps permuting values through `&mut self`.
//!
//! The four traits mirror the tiers in [`capability`](crate::capability):
//!
//! | Trait                      | Adds                                        |
//! |----------------------------|---------------------------------------------|
//! | [`ForwardSequence`]        | `begin`, `end`, `next`, `at`, `swap`        |
//! | [`BidirectionalSequence`]  | `prev`                                      |
//! | [`RandomAccessSequence`]   | `jump`, `distance`                          |
//! | [`ContiguousSequence`]     | `as_slice`, `as_mut_slice`                  |
//!
//! Stock implementations exist for slices, arrays, [`Vec`], [`VecDeque`], the singly linked
//! [`ForwardList`] and the doubly linked [`List`]. [`StrideView`] is a strided window over any of
//! them.

mod forward_list;
mod list;
mod stride;

pub use forward_list::{ForwardCursor, ForwardList};
pub use list::{List, ListCursor};
pub use stride::{StrideCursor, StrideView};

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::capability::{self, Category};

/// A sequence that can be walked front to back one element at a time.
///
/// # Contract
///
/// * `begin()` and `end()` bound the whole sequence as the half open range `[begin, end)`.
/// * `next` must only be called on cursors other than `end()`.
/// * `at` and `swap` must only be called on cursors that point at an element.
/// * If `SIZED` is `true`, `sized_distance` returns `Some` for every valid range.
pub trait ForwardSequence {
    type Item;
    type Cursor: Copy + Eq + Debug;
    type Category: Category;

    /// The number of elements in any `[first, last)` is known in O(1).
    const SIZED: bool = false;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Cursor;

    /// The position right after `cursor`.
    fn next(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// The element under `cursor`.
    fn at(&self, cursor: Self::Cursor) -> &Self::Item;

    /// Exchanges the elements under `a` and `b`.
    fn swap(&mut self, a: Self::Cursor, b: Self::Cursor);

    /// The number of elements in `[first, last)`, if that can be answered without walking.
    fn sized_distance(&self, _first: Self::Cursor, _last: Self::Cursor) -> Option<usize> {
        None
    }

    /// Moves `cursor` forward by `n` positions, stopping early at `last`.
    fn advance_by(&self, mut cursor: Self::Cursor, mut n: usize, last: Self::Cursor) -> Self::Cursor {
        while n > 0 && cursor != last {
            cursor = self.next(cursor);
            n -= 1;
        }
        cursor
    }
}

/// A sequence whose cursors can also step backwards.
///
/// `prev` must only be called on cursors other than `begin()`; `prev(end())` is the last element.
pub trait BidirectionalSequence: ForwardSequence {
    fn prev(&self, cursor: Self::Cursor) -> Self::Cursor;
}

/// A sequence with constant time jumps and distances.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Moves `cursor` by `n` positions, backwards if `n` is negative.
    fn jump(&self, cursor: Self::Cursor, n: isize) -> Self::Cursor;

    /// The number of elements in `[first, last)`. `first` must not come after `last`.
    fn distance(&self, first: Self::Cursor, last: Self::Cursor) -> usize;
}

/// A random access sequence stored in one slice.
pub trait ContiguousSequence: RandomAccessSequence {
    fn as_slice(&self) -> &[Self::Item];

    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

// Slices, arrays and vectors are indexed by plain `usize` cursors.
macro_rules! contiguous_sequence {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($generics)*> ForwardSequence for $ty {
            type Item = T;
            type Cursor = usize;
            type Category = capability::Contiguous;

            const SIZED: bool = true;

            #[inline]
            fn begin(&self) -> usize {
                0
            }

            #[inline]
            fn end(&self) -> usize {
                self.len()
            }

            #[inline]
            fn next(&self, cursor: usize) -> usize {
                cursor + 1
            }

            #[inline]
            fn at(&self, cursor: usize) -> &T {
                &self[cursor]
            }

            #[inline]
            fn swap(&mut self, a: usize, b: usize) {
                <[T]>::swap(self, a, b)
            }

            #[inline]
            fn sized_distance(&self, first: usize, last: usize) -> Option<usize> {
                Some(last - first)
            }

            #[inline]
            fn advance_by(&self, cursor: usize, n: usize, last: usize) -> usize {
                cursor + n.min(last - cursor)
            }
        }

        impl<$($generics)*> BidirectionalSequence for $ty {
            #[inline]
            fn prev(&self, cursor: usize) -> usize {
                cursor - 1
            }
        }

        impl<$($generics)*> RandomAccessSequence for $ty {
            #[inline]
            fn jump(&self, cursor: usize, n: isize) -> usize {
                cursor.wrapping_add_signed(n)
            }

            #[inline]
            fn distance(&self, first: usize, last: usize) -> usize {
                last - first
            }
        }

        impl<$($generics)*> ContiguousSequence for $ty {
            #[inline]
            fn as_slice(&self) -> &[T] {
                &self[..]
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self[..]
            }
        }
    )*};
}

contiguous_sequence! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
}

impl<T> ForwardSequence for VecDeque<T> {
    type Item = T;
    type Cursor = usize;
    type Category = capability::RandomAccess;

    const SIZED: bool = true;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn next(&self, cursor: usize) -> usize {
        cursor + 1
    }

    #[inline]
    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }

    #[inline]
    fn sized_distance(&self, first: usize, last: usize) -> Option<usize> {
        Some(last - first)
    }

    #[inline]
    fn advance_by(&self, cursor: usize, n: usize, last: usize) -> usize {
        cursor + n.min(last - cursor)
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    #[inline]
    fn prev(&self, cursor: usize) -> usize {
        cursor - 1
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    #[inline]
    fn jump(&self, cursor: usize, n: isize) -> usize {
        cursor.wrapping_add_signed(n)
    }

    #[inline]
    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }
}

/// Collects the elements of `[first, last)` by cloning them, front to back.
///
/// ```
/// use cursort_sorts::sequence::{collect_range, ForwardList, ForwardSequence};
///
/// let list: ForwardList<_> = [4, 5, 6].into_iter().collect();
/// let second = list.next(list.begin());
/// assert_eq!(collect_range(&list, second, list.end()), vec![5, 6]);
/// ```
pub fn collect_range<S>(seq: &S, mut first: S::Cursor, last: S::Cursor) -> Vec<S::Item>
where
    S: ForwardSequence + ?Sized,
    S::Item: Clone,
{
    let mut out = Vec::new();
    while first != last {
        out.push(seq.at(first).clone());
        first = seq.next(first);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_cursors_are_indices() {
        let v = vec![10, 20, 30];
        let begin = ForwardSequence::begin(&v);
        assert_eq!(begin, 0);
        assert_eq!(ForwardSequence::end(&v), 3);
        assert_eq!(*ForwardSequence::at(&v, ForwardSequence::next(&v, begin)), 20);
        assert_eq!(RandomAccessSequence::jump(&v, 2, -2), 0);
        assert_eq!(RandomAccessSequence::distance(&v, 1, 3), 2);
    }

    #[test]
    fn bounded_advance_stops_at_last() {
        let v = [1, 2, 3, 4, 5];
        assert_eq!(ForwardSequence::advance_by(&v, 1, 10, 4), 4);
        assert_eq!(ForwardSequence::advance_by(&v, 1, 2, 4), 3);

        let list: ForwardList<_> = v.into_iter().collect();
        let end = list.end();
        assert_eq!(list.advance_by(list.begin(), 10, end), end);
    }

    #[test]
    fn deque_swap() {
        let mut d: VecDeque<_> = (1..=4).collect();
        d.push_front(0);
        ForwardSequence::swap(&mut d, 0, 4);
        assert_eq!(d, [4, 1, 2, 3, 0]);
    }

    #[test]
    fn contiguous_views() {
        let mut v = vec![3, 1, 2];
        ContiguousSequence::as_mut_slice(&mut v).sort();
        assert_eq!(ContiguousSequence::as_slice(&v), &[1, 2, 3]);
    }
}

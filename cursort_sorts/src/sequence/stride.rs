use super::{BidirectionalSequence, ForwardSequence, RandomAccessSequence};
use crate::capability::Category;

/// Every `stride`-th element of `[first, last)` of another sequence, starting at `first`.
///
/// The view borrows its base mutably, so swapping through the view permutes the base. It is
/// exactly as capable as its base, except that a contiguous base only yields a random access
/// view.
///
/// ```
/// use cursort_sorts::orst::insertion_sort;
/// use cursort_sorts::sequence::StrideView;
///
/// let mut v = vec![9, 1, 7, 2, 5, 3];
/// let (first, last) = (0, v.len());
/// insertion_sort(&mut StrideView::new(&mut v, first, last, 2));
/// assert_eq!(v, vec![5, 1, 7, 2, 9, 3]);
/// ```
pub struct StrideView<'a, S>
where
    S: ForwardSequence + ?Sized,
{
    base: &'a mut S,
    first: S::Cursor,
    last: S::Cursor,
    stride: usize,
    end_missing: usize,
}

/// A position in a [`StrideView`].
///
/// `missing` counts how many base steps a jump past `last` fell short by, which is what lets
/// the end position step back onto the last element of the view.
#[derive(Debug, Clone, Copy)]
pub struct StrideCursor<C> {
    pos: C,
    missing: usize,
}

impl<C: PartialEq> PartialEq for StrideCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C: Eq> Eq for StrideCursor<C> {}

impl<C> StrideCursor<C> {
    /// The cursor of the underlying sequence.
    pub fn base(&self) -> &C {
        &self.pos
    }
}

impl<'a, S> StrideView<'a, S>
where
    S: ForwardSequence + ?Sized,
{
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn new(base: &'a mut S, first: S::Cursor, last: S::Cursor, stride: usize) -> Self {
        assert!(stride > 0, "a stride view needs a stride of at least one");

        let len = match base.sized_distance(first, last) {
            Some(len) => len,
            None => {
                let mut len = 0;
                let mut cursor = first;
                while cursor != last {
                    cursor = base.next(cursor);
                    len += 1;
                }
                len
            }
        };

        Self {
            base,
            first,
            last,
            stride,
            end_missing: (stride - len % stride) % stride,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<S> ForwardSequence for StrideView<'_, S>
where
    S: ForwardSequence + ?Sized,
{
    type Item = S::Item;
    type Cursor = StrideCursor<S::Cursor>;
    type Category = <S::Category as Category>::Strided;

    const SIZED: bool = S::SIZED;

    fn begin(&self) -> Self::Cursor {
        StrideCursor {
            pos: self.first,
            missing: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        StrideCursor {
            pos: self.last,
            missing: self.end_missing,
        }
    }

    fn next(&self, cursor: Self::Cursor) -> Self::Cursor {
        let (pos, taken) = match self.base.sized_distance(cursor.pos, self.last) {
            Some(remaining) => {
                let taken = remaining.min(self.stride);
                (self.base.advance_by(cursor.pos, taken, self.last), taken)
            }
            None => {
                let mut pos = cursor.pos;
                let mut taken = 0;
                while taken < self.stride && pos != self.last {
                    pos = self.base.next(pos);
                    taken += 1;
                }
                (pos, taken)
            }
        };

        StrideCursor {
            pos,
            missing: self.stride - taken,
        }
    }

    fn at(&self, cursor: Self::Cursor) -> &Self::Item {
        self.base.at(cursor.pos)
    }

    fn swap(&mut self, a: Self::Cursor, b: Self::Cursor) {
        self.base.swap(a.pos, b.pos)
    }

    fn sized_distance(&self, first: Self::Cursor, last: Self::Cursor) -> Option<usize> {
        self.base
            .sized_distance(first.pos, last.pos)
            .map(|len| (len + last.missing - first.missing) / self.stride)
    }
}

impl<S> BidirectionalSequence for StrideView<'_, S>
where
    S: BidirectionalSequence + ?Sized,
{
    fn prev(&self, cursor: Self::Cursor) -> Self::Cursor {
        let mut pos = cursor.pos;
        for _ in 0..(self.stride - cursor.missing) {
            pos = self.base.prev(pos);
        }
        StrideCursor { pos, missing: 0 }
    }
}

impl<S> RandomAccessSequence for StrideView<'_, S>
where
    S: RandomAccessSequence + ?Sized,
{
    fn jump(&self, cursor: Self::Cursor, n: isize) -> Self::Cursor {
        if n >= 0 {
            let wanted = n.unsigned_abs() * self.stride;
            let taken = wanted.min(self.base.distance(cursor.pos, self.last));
            StrideCursor {
                pos: self.base.jump(cursor.pos, taken as isize),
                missing: wanted - taken,
            }
        } else {
            let back = n.unsigned_abs() * self.stride - cursor.missing;
            StrideCursor {
                pos: self.base.jump(cursor.pos, -(back as isize)),
                missing: 0,
            }
        }
    }

    fn distance(&self, first: Self::Cursor, last: Self::Cursor) -> usize {
        (self.base.distance(first.pos, last.pos) + last.missing - first.missing) / self.stride
    }
}

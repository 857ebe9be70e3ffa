use crate::navigation::is_size_zero_or_one;
use crate::orst::insertion_sort_by;
use crate::orst::Sorter;
use crate::sequence::{BidirectionalSequence, StrideView};

/// The Ciura gap sequence, largest first. Ending in `1` is what guarantees a sorted result.
pub const GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// # Usage
///```
/// use cursort_sorts::orst::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Shell sort is a generalisation of insertion sort that first sorts elements far apart from each
/// other and then shrinks the gap. Moving an element a long way in one swap is what lets it beat
/// plain insertion sort.
///
/// # Algorithm
///
/// For every gap `g` in [`GAPS`] the range is split into the `g` interleaved sub-sequences
/// `first + k, first + k + g, first + k + 2g, ...` and each one is insertion sorted through a
/// [`StrideView`]. If the length of the range is known in O(1), gaps that do not fit are skipped;
/// otherwise every gap is tried and an oversized one only ever sees one element per
/// sub-sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSorter;

impl<S> Sorter<S> for ShellSorter
where
    S: BidirectionalSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Cursor, last: S::Cursor, is_less: F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        shell_sort_range_by(seq, first, last, is_less)
    }
}

pub fn shell_sort<S>(seq: &mut S)
where
    S: BidirectionalSequence + ?Sized,
    S::Item: Ord,
{
    shell_sort_by(seq, |a, b| a < b)
}

pub fn shell_sort_by<S, F>(seq: &mut S, is_less: F)
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    shell_sort_range_by(seq, first, last, is_less)
}

pub fn shell_sort_range_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut is_less: F)
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if is_size_zero_or_one(seq, first, last) {
        return;
    }

    let gaps = match seq.sized_distance(first, last) {
        Some(len) => &GAPS[GAPS.partition_point(|&gap| gap > len)..],
        None => &GAPS[..],
    };

    for &gap in gaps {
        let mut start = first;
        for _ in 0..gap {
            if start == last {
                break;
            }
            let mut view = StrideView::new(&mut *seq, start, last, gap);
            insertion_sort_by(&mut view, &mut is_less);
            start = seq.next(start);
        }
    }
}

use std::cmp::Ordering;

use crate::sequence::{BidirectionalSequence, ForwardSequence};

/// Moves every element of `[first, last)` that is less than the element at `pivot` to the front
/// of the range in a single forward pass and returns the first position of the rest.
///
/// The elements that compare less keep their relative order. `pivot` must lie outside
/// `[first, last)` since it is read throughout the pass.
///
/// ```
/// use cursort_sorts::orst::partition;
///
/// let mut v = vec![5, 1, 7, 3, 8, 2, 4];
/// let boundary = partition(&mut v, 0, 6, 6, |a, b| a < b);
/// assert_eq!(boundary, 3);
/// assert_eq!(&v[..3], &[1, 3, 2]);
/// ```
pub fn partition<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    pivot: S::Cursor,
    mut is_less: F,
) -> S::Cursor
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut boundary = first;
    while boundary != last && is_less(seq.at(boundary), seq.at(pivot)) {
        boundary = seq.next(boundary);
    }
    if boundary == last {
        return boundary;
    }

    let mut i = seq.next(boundary);
    while i != last {
        if is_less(seq.at(i), seq.at(pivot)) {
            seq.swap(i, boundary);
            boundary = seq.next(boundary);
        }
        i = seq.next(i);
    }
    boundary
}

/// Splits the whole sequence around `value`, see [`three_way_partition_range_by`].
///
/// ```
/// use cursort_sorts::orst::three_way_partition;
///
/// let mut v = vec![1, 5, 8, 16, 32, 32, 59, 100];
/// let (lo, hi) = three_way_partition(&mut v, &32);
/// assert_eq!((lo, hi), (4, 6));
/// assert_eq!(&v[lo..hi], &[32, 32]);
/// ```
pub fn three_way_partition<S>(seq: &mut S, value: &S::Item) -> (S::Cursor, S::Cursor)
where
    S: BidirectionalSequence + ?Sized,
    S::Item: Ord,
{
    three_way_partition_by(seq, value, Ord::cmp)
}

pub fn three_way_partition_by<S, F>(seq: &mut S, value: &S::Item, cmp: F) -> (S::Cursor, S::Cursor)
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let (first, last) = (seq.begin(), seq.end());
    three_way_partition_range_by(seq, first, last, value, cmp)
}

/// Rearranges `[first, last)` into three zones around `value` and returns `(lo, hi)`:
///
/// * `[first, lo)` holds the elements less than `value`,
/// * `[lo, hi)` holds the elements equal to `value`,
/// * `[hi, last)` holds the elements greater than `value`.
///
/// One pass, every element is compared exactly once.
pub fn three_way_partition_range_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    value: &S::Item,
    mut cmp: F,
) -> (S::Cursor, S::Cursor)
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    // [lo, i) is equal to `value`, [i, hi) is still unvisited.
    let mut lo = first;
    let mut i = first;
    let mut hi = last;

    while i != hi {
        match cmp(seq.at(i), value) {
            Ordering::Less => {
                seq.swap(lo, i);
                lo = seq.next(lo);
                i = seq.next(i);
            }
            Ordering::Greater => {
                hi = seq.prev(hi);
                seq.swap(i, hi);
            }
            Ordering::Equal => i = seq.next(i),
        }
    }

    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{collect_range, ForwardList, List};

    #[test]
    fn partition_keeps_the_front_in_order() {
        let mut list: ForwardList<_> = [9, 1, 8, 2, 7, 3, 5].into_iter().collect();
        let first = list.begin();
        let mut pivot = first;
        for _ in 0..6 {
            pivot = list.next(pivot);
        }

        let boundary = partition(&mut list, first, pivot, pivot, |a, b| a < b);
        assert_eq!(collect_range(&list, first, boundary), vec![1, 2, 3]);

        let mut rest = collect_range(&list, boundary, pivot);
        rest.sort();
        assert_eq!(rest, vec![7, 8, 9]);
    }

    #[test]
    fn partition_edge_cases() {
        let mut v = vec![1, 2, 3, 0];
        assert_eq!(partition(&mut v, 0, 0, 3, |a, b| a < b), 0);
        assert_eq!(partition(&mut v, 0, 3, 3, |a, b| a < b), 0);
        assert_eq!(partition(&mut v, 0, 3, 3, |a, b| a > b), 3);
    }

    #[test]
    fn zones_on_a_list() {
        let mut list: List<_> = [59, 32, 1, 100, 16, 32, 8, 5].into_iter().collect();
        let (lo, hi) = three_way_partition(&mut list, &32);

        let mut less = collect_range(&list, list.begin(), lo);
        less.sort();
        assert_eq!(less, vec![1, 5, 8, 16]);
        assert_eq!(collect_range(&list, lo, hi), vec![32, 32]);

        let mut greater = collect_range(&list, hi, list.end());
        greater.sort();
        assert_eq!(greater, vec![59, 100]);
    }

    #[test]
    fn pivot_not_present() {
        let mut v = vec![4, 1, 3, 6];
        let (lo, hi) = three_way_partition(&mut v, &2);
        assert_eq!((lo, hi), (1, 1));
        assert_eq!(v[0], 1);
    }

    #[test]
    fn empty_and_uniform() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(three_way_partition(&mut empty, &0), (0, 0));

        let mut same = vec![2, 2, 2, 2];
        assert_eq!(three_way_partition(&mut same, &2), (0, 4));
        assert_eq!(three_way_partition(&mut same, &3), (4, 4));
        assert_eq!(three_way_partition(&mut same, &1), (0, 0));
    }

    #[test]
    fn custom_ordering() {
        let mut words = vec!["pear", "fig", "banana", "kiwi", "apple"];
        let (lo, hi) = three_way_partition_by(&mut words, &"plum", |a, b| a.len().cmp(&b.len()));
        assert_eq!(lo, 1);
        assert_eq!(&words[lo..hi], &["pear", "kiwi"]);
        assert!(words[hi..].iter().all(|w| w.len() > 4));
    }
}

use std::cmp::Ordering;
use std::collections::VecDeque;

use cursort_sorts::catalog::{sort_values, Algorithm, SequenceKind};
use cursort_sorts::orst::{
    bubble_sort_by, insertion_sort_by, three_way_partition, three_way_partition_by,
};
use cursort_sorts::sequence::{ForwardList, List};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 0x5eed;

fn random_values(random: &mut StdRng, len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| random.gen_range(0..=max)).collect()
}

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn supported_pairs() -> impl Iterator<Item = (Algorithm, SequenceKind)> {
    Algorithm::ALL.into_iter().flat_map(|algorithm| {
        SequenceKind::ALL
            .into_iter()
            .filter(move |kind| kind.supports(algorithm))
            .map(move |kind| (algorithm, kind))
    })
}

#[test]
fn random_inputs_come_out_sorted_and_permuted() {
    let mut random = StdRng::seed_from_u64(SEED);

    for len in [0, 1, 2, 3, 7, 10, 11, 64, 257] {
        let values = random_values(&mut random, len, 50);
        let mut expected = values.clone();
        expected.sort();

        for (algorithm, kind) in supported_pairs() {
            let sorted = sort_values(algorithm, kind, values.clone(), |a, b| a < b).unwrap();
            assert!(is_sorted(&sorted), "{algorithm} on {kind}, len {len}");
            assert_eq!(sorted, expected, "{algorithm} on {kind}, len {len}");
        }
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut random = StdRng::seed_from_u64(SEED + 1);
    let values = random_values(&mut random, 200, 1_000);

    for (algorithm, kind) in supported_pairs() {
        let once = sort_values(algorithm, kind, values.clone(), |a, b| a < b).unwrap();
        let twice = sort_values(algorithm, kind, once.clone(), |a, b| a < b).unwrap();
        assert_eq!(once, twice, "{algorithm} on {kind}");
    }
}

#[test]
fn descending_predicate() {
    for (algorithm, kind) in supported_pairs() {
        let sorted = sort_values(algorithm, kind, vec![5, 3, 8, 1, 9, 2], |a, b| a > b).unwrap();
        assert_eq!(sorted, vec![9, 8, 5, 3, 2, 1], "{algorithm} on {kind}");
    }
}

#[test]
fn known_scenarios() {
    for (algorithm, kind) in supported_pairs() {
        let sort = |values: Vec<i64>| sort_values(algorithm, kind, values, |a, b| a < b).unwrap();

        assert_eq!(sort(vec![5, 3, 8, 1, 9, 2]), vec![1, 2, 3, 5, 8, 9]);
        assert!(sort(vec![]).is_empty());
        assert_eq!(sort(vec![42]), vec![42]);
        assert_eq!(sort(vec![2, 2, 2, 2]), vec![2, 2, 2, 2]);
        assert_eq!(
            sort((1..=1000).rev().collect()),
            (1..=1000).collect::<Vec<_>>(),
            "{algorithm} on {kind}"
        );
    }
}

#[test]
fn stable_sorters_keep_ties_in_order() {
    let mut random = StdRng::seed_from_u64(SEED + 2);
    let keyed: Vec<(i64, usize)> = random_values(&mut random, 300, 9)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();
    let by_key = |a: &(i64, usize), b: &(i64, usize)| a.0 < b.0;

    let mut expected = keyed.clone();
    expected.sort_by_key(|&(key, _)| key);

    let mut forward: ForwardList<_> = keyed.iter().copied().collect();
    bubble_sort_by(&mut forward, by_key);
    assert_eq!(forward.to_vec(), expected);

    let mut list: List<_> = keyed.iter().copied().collect();
    insertion_sort_by(&mut list, by_key);
    assert_eq!(list.to_vec(), expected);

    let mut deque: VecDeque<_> = keyed.iter().copied().collect();
    insertion_sort_by(&mut deque, by_key);
    assert_eq!(deque, expected);

    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        let sorted = sort_values(algorithm, SequenceKind::Vec, keyed.clone(), by_key).unwrap();
        assert_eq!(sorted, expected, "{algorithm}");
    }
}

#[test]
fn three_way_partition_zones() {
    let mut random = StdRng::seed_from_u64(SEED + 3);

    for len in [0, 1, 2, 5, 31, 100] {
        let original = random_values(&mut random, len, 10);
        let pivot = random.gen_range(0..=10);

        let mut values = original.clone();
        let (lo, hi) = three_way_partition(&mut values, &pivot);

        assert!(lo <= hi && hi <= values.len());
        assert!(values[..lo].iter().all(|&v| v < pivot));
        assert!(values[lo..hi].iter().all(|&v| v == pivot));
        assert!(values[hi..].iter().all(|&v| v > pivot));

        let mut expected = original;
        expected.sort();
        values.sort();
        assert_eq!(values, expected);
    }
}

#[test]
fn three_way_partition_on_lists() {
    let mut list: List<_> = [1, 5, 8, 16, 32, 32, 59, 100].into_iter().collect();
    let (lo, hi) = three_way_partition_by(&mut list, &32, |a: &i64, b: &i64| a.cmp(b));

    assert_ne!(lo, hi);

    let mut values = list.to_vec();
    let split = values.iter().position(|&v| v == 32).unwrap();
    assert!(values[..split].iter().all(|&v| v < 32));
    assert_eq!(&values[split..split + 2], &[32, 32]);
    assert!(values[split + 2..].iter().all(|&v| v > 32));

    values.sort();
    assert_eq!(values, vec![1, 5, 8, 16, 32, 32, 59, 100]);
}

#[test]
fn reversed_ordering_partition() {
    let mut values = vec![1, 5, 8, 16, 32, 32, 59, 100];
    let (lo, hi) = three_way_partition_by(&mut values, &32, |a, b| b.cmp(a));
    assert_eq!((lo, hi), (2, 4));
    assert!(values[..lo]
        .iter()
        .all(|v| 32.cmp(v) == Ordering::Less));
}

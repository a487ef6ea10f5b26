//! Behaviour every sorter shares, checked across the whole registry.

use std::cmp::Ordering;

use proptest::prelude::*;
use sortbench_core::memory::NoMemory;
use sortbench_core::orst::benchmark::Harness;
use sortbench_core::orst::{
    is_sorted, AlgorithmKind, BubbleSorter, CocktailSorter, HeapSorter, InsertionSorter,
    LibrarySorter, MergeSorter, SelectionSorter, Sorter, TimSorter, TournamentSorter,
};

/// An element compared on `key` only, so equal keys can still be told apart by `tag`.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn tags(slice: &[Tagged]) -> Vec<usize> {
    slice.iter().map(|t| t.tag).collect()
}

/// Sorts `keys` tagged with their positions and compares the tag order with `sort_by_key`.
fn assert_stable<S: Sorter<Tagged>>(sorter: &S, keys: &[i32]) {
    let mut actual = tagged(keys);
    sorter.sort(&mut actual);

    let mut expected = tagged(keys);
    expected.sort_by_key(|t| t.key);

    assert_eq!(tags(&actual), tags(&expected), "keys: {keys:?}");
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

proptest! {
    #[test]
    fn prop_every_algorithm_sorts_a_permutation(
        values in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let expected = sorted_copy(&values);

        for algorithm in AlgorithmKind::all() {
            let mut actual = values.clone();
            algorithm.sort(&mut actual);
            prop_assert_eq!(&actual, &expected, "{}", algorithm.name());
        }
    }

    #[test]
    fn prop_sorting_twice_changes_nothing(
        values in prop::collection::vec(-20i32..20, 0..200)
    ) {
        for algorithm in AlgorithmKind::all() {
            let mut once = values.clone();
            algorithm.sort(&mut once);
            let mut twice = once.clone();
            algorithm.sort(&mut twice);

            prop_assert!(is_sorted(&once), "{}", algorithm.name());
            prop_assert_eq!(&once, &twice, "{}", algorithm.name());
        }
    }

    #[test]
    fn prop_stable_algorithms_keep_equal_keys_in_order(
        keys in prop::collection::vec(0i32..8, 0..150)
    ) {
        assert_stable(&MergeSorter, &keys);
        assert_stable(&InsertionSorter { smart: false }, &keys);
        assert_stable(&InsertionSorter { smart: true }, &keys);
        assert_stable(&BubbleSorter, &keys);
        assert_stable(&CocktailSorter, &keys);
        assert_stable(&TimSorter, &keys);
        assert_stable(&LibrarySorter, &keys);
    }

    #[test]
    fn prop_harness_reports_every_run_sorted(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let mut harness = Harness::with_sampler(NoMemory);
        for result in harness.run_all(&AlgorithmKind::all(), &values) {
            prop_assert!(result.is_sorted(), "{}", result.algorithm());
            prop_assert_eq!(result.memory_bytes(), 0);
            prop_assert!(result.time_ms() >= 0.0);
        }
    }
}

#[test]
fn empty_input_for_every_algorithm() {
    for algorithm in AlgorithmKind::all() {
        let mut empty: Vec<i32> = vec![];
        algorithm.sort(&mut empty);
        assert!(empty.is_empty());
        assert!(is_sorted(&empty));
    }
}

#[test]
fn reversed_five_for_every_algorithm() {
    for algorithm in AlgorithmKind::all() {
        let mut slice = vec![5, 4, 3, 2, 1];
        algorithm.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5], "{}", algorithm.name());
    }
}

#[test]
fn stable_sort_of_tagged_duplicates() {
    let keys = [3, 1, 2, 3, 1];
    // a b c d e
    let expected = vec![1, 4, 2, 0, 3];

    for kind in AlgorithmKind::ALL {
        let algorithm = kind.build();
        if !algorithm.is_stable() {
            continue;
        }
        let mut actual = tagged(&keys);
        match kind {
            AlgorithmKind::Merge => MergeSorter.sort(&mut actual),
            AlgorithmKind::Insertion => InsertionSorter { smart: false }.sort(&mut actual),
            AlgorithmKind::Bubble => BubbleSorter.sort(&mut actual),
            AlgorithmKind::Cocktail => CocktailSorter.sort(&mut actual),
            AlgorithmKind::Tim => TimSorter.sort(&mut actual),
            AlgorithmKind::Library => LibrarySorter.sort(&mut actual),
            other => panic!("{other} is flagged stable but has no tagged check"),
        }
        assert_eq!(tags(&actual), expected, "{}", algorithm.name());
    }
}

#[test]
fn library_sort_through_four_rebalances() {
    let mut slice = (0..16).rev().collect::<Vec<i32>>();
    LibrarySorter.sort(&mut slice);
    assert_eq!(slice, (0..16).collect::<Vec<_>>());
}

#[test]
fn tournament_sort_pads_odd_lengths() {
    let mut slice = [9, 3, 7, 3, 1];
    TournamentSorter.sort(&mut slice);
    assert_eq!(slice, [1, 3, 3, 7, 9]);
}

#[test]
fn selection_sort_is_not_stable() {
    let mut slice = tagged(&[2, 2, 1]);
    SelectionSorter.sort(&mut slice);
    assert_eq!(tags(&slice), [2, 1, 0]);
}

#[test]
fn heap_sort_is_not_stable() {
    let mut slice = tagged(&[1, 1]);
    HeapSorter.sort(&mut slice);
    assert_eq!(tags(&slice), [1, 0]);
}

#[test]
fn descriptors_are_consistent() {
    for algorithm in AlgorithmKind::all() {
        assert!(!algorithm.name().is_empty());
        for class in [
            algorithm.best_case(),
            algorithm.average_case(),
            algorithm.worst_case(),
            algorithm.space_complexity(),
        ] {
            assert!(class.starts_with("O("), "{}: {class}", algorithm.name());
        }
    }

    let stable = AlgorithmKind::all()
        .iter()
        .filter(|algorithm| algorithm.is_stable())
        .map(|algorithm| algorithm.name())
        .collect::<Vec<_>>();
    assert_eq!(
        stable,
        [
            "Merge Sort",
            "Bubble Sort",
            "Insertion Sort",
            "Library Sort",
            "Tim Sort",
            "Cocktail Shaker Sort",
        ]
    );
}

#[test]
fn process_memory_readings_are_plausible() {
    let data = (0..10_000).rev().collect::<Vec<i32>>();
    let mut harness = Harness::new();
    for result in harness.run_all(&AlgorithmKind::all()[..3], &data) {
        assert!(result.memory_bytes() < u64::MAX / 2);
        assert!(result.is_sorted());
    }
}

//! Implementation of classic sorting algorithms, started from [Crust of Rust: Sorting
//! Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM) and grown to eleven variants.
//!
//! Every sorter implements the generic [`Sorter`] trait, so it can sort anything [`Ord`]. The
//! benchmark side only ever deals with integers, through the [`Algorithm`] descriptor which adds
//! the static facts about each variant: its name, whether it is stable and its complexity classes.
//!
//! # Example
//!
//! ```
//! use sortbench_core::orst::BubbleSorter;
//! use sortbench_core::orst::Sorter;
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```
//!
//! Picking an algorithm at runtime goes through [`AlgorithmKind`]:
//!
//! ```
//! use sortbench_core::orst::{AlgorithmKind, Sorter};
//!
//! let heap = "heap".parse::<AlgorithmKind>().unwrap().build();
//! let mut values = vec![3, -1, 2];
//! heap.sort(&mut values);
//!
//! assert_eq!(values, [-1, 2, 3]);
//! assert_eq!(heap.name(), "Heap Sort");
//! assert!(!heap.is_stable());
//! ```

pub mod benchmark;
mod sorters;

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ParseKindError;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::cocktail_sorter::CocktailSorter;
pub use sorters::comb_sorter::CombSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::library_sorter::LibrarySorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::tim_sorter::TimSorter;
pub use sorters::tournament_sorter::TournamentSorter;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `sort` arranges the slice in ascending order, in place. It must terminate and must not panic
/// for any slice, including empty and single element ones.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// The descriptor every benchmarked algorithm satisfies.
///
/// All the metadata is constant for a given variant. It describes the design of the algorithm
/// and is never measured from data; in particular `is_stable` is not re-verified at runtime.
pub trait Algorithm: Sorter<i32> {
    /// Human readable name, e.g. `"Merge Sort"`.
    fn name(&self) -> &'static str;

    /// Whether equal elements keep their relative input order.
    fn is_stable(&self) -> bool;

    fn best_case(&self) -> &'static str;

    fn average_case(&self) -> &'static str;

    fn worst_case(&self) -> &'static str;

    /// Auxiliary space class.
    fn space_complexity(&self) -> &'static str;
}

/// Returns `true` if the slice is in non-decreasing order. Empty and single element slices are
/// trivially sorted.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Identifies one of the eleven algorithm variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Merge,
    Heap,
    Quick,
    Bubble,
    Insertion,
    Selection,
    Tournament,
    Library,
    Comb,
    Tim,
    Cocktail,
}

impl AlgorithmKind {
    /// Every variant, in the order the benchmarks report them.
    pub const ALL: [AlgorithmKind; 11] = [
        AlgorithmKind::Merge,
        AlgorithmKind::Heap,
        AlgorithmKind::Quick,
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Tournament,
        AlgorithmKind::Library,
        AlgorithmKind::Comb,
        AlgorithmKind::Tim,
        AlgorithmKind::Cocktail,
    ];

    /// Builds a fresh instance of the algorithm behind dynamic dispatch.
    pub fn build(self) -> Box<dyn Algorithm> {
        match self {
            AlgorithmKind::Merge => Box::new(MergeSorter),
            AlgorithmKind::Heap => Box::new(HeapSorter),
            AlgorithmKind::Quick => Box::new(QuickSorter),
            AlgorithmKind::Bubble => Box::new(BubbleSorter),
            AlgorithmKind::Insertion => Box::new(InsertionSorter { smart: false }),
            AlgorithmKind::Selection => Box::new(SelectionSorter),
            AlgorithmKind::Tournament => Box::new(TournamentSorter),
            AlgorithmKind::Library => Box::new(LibrarySorter),
            AlgorithmKind::Comb => Box::new(CombSorter),
            AlgorithmKind::Tim => Box::new(TimSorter),
            AlgorithmKind::Cocktail => Box::new(CocktailSorter),
        }
    }

    /// Builds every algorithm, in [`AlgorithmKind::ALL`] order.
    pub fn all() -> Vec<Box<dyn Algorithm>> {
        Self::ALL.iter().map(|kind| kind.build()).collect()
    }

    fn id(self) -> &'static str {
        match self {
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Heap => "heap",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Tournament => "tournament",
            AlgorithmKind::Library => "library",
            AlgorithmKind::Comb => "comb",
            AlgorithmKind::Tim => "tim",
            AlgorithmKind::Cocktail => "cocktail",
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| {
                ParseKindError::new(
                    "algorithm",
                    s,
                    Self::ALL.iter().map(|kind| kind.id()).collect(),
                )
            })
    }
}
